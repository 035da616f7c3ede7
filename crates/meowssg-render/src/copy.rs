//! Static page copy for the informational routes.

/// Copy for one informational page.
#[derive(Debug, Clone, Copy)]
pub struct InfoPage {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// Look up the copy for an informational route path.
pub fn info_page(path: &str) -> Option<&'static InfoPage> {
    INFO_PAGES.iter().find(|page| page.path == path)
}

pub const INFO_PAGES: &[InfoPage] = &[
    InfoPage {
        path: "/adopt",
        title: "Adopt a Cat | MeowRescue",
        description: "Start your adoption journey with MeowRescue: browse adoptable cats, \
submit an application, and bring home a new family member.",
        heading: "Adopt a Cat",
        paragraphs: &[
            "Every cat in our program has been examined by a veterinarian, vaccinated, \
and spayed or neutered before adoption. Browse our adoptable cats, then submit an \
application and an adoption counselor will reach out within a few days.",
            "Adoption fees cover a portion of the veterinary care each cat receives and \
help fund the rescue of the next cat in need.",
        ],
    },
    InfoPage {
        path: "/foster",
        title: "Become a Foster | MeowRescue",
        description: "Open your home to a cat in need. MeowRescue covers supplies and \
veterinary care for every foster placement.",
        heading: "Become a Foster",
        paragraphs: &[
            "Foster homes are the heart of our rescue. We match you with a cat suited \
to your household and provide food, litter, supplies, and all veterinary care.",
            "Fosters care for kittens too young for adoption, cats recovering from \
illness, and mothers raising litters. Most placements last two to eight weeks.",
        ],
    },
    InfoPage {
        path: "/volunteer",
        title: "Volunteer | MeowRescue",
        description: "Volunteer with MeowRescue: transport, events, photography, and \
community outreach roles for every schedule.",
        heading: "Volunteer With Us",
        paragraphs: &[
            "We rely on volunteers for transport runs, adoption events, photography, \
home visits, and community education. Tell us your interests and availability \
and we will find a role that fits.",
        ],
    },
    InfoPage {
        path: "/donate",
        title: "Donate | MeowRescue",
        description: "Your donation funds veterinary care, food, and shelter for \
rescued cats. MeowRescue is a 501(c)(3) nonprofit.",
        heading: "Support Our Cats",
        paragraphs: &[
            "Every dollar goes directly to the cats: emergency surgeries, vaccines, \
spay and neuter procedures, food, and supplies. Donations are tax-deductible.",
            "Monthly giving provides the steady support that lets us say yes when an \
urgent rescue call comes in.",
        ],
    },
    InfoPage {
        path: "/lost-found",
        title: "Lost & Found Cats | MeowRescue",
        description: "Report a lost or found cat and browse recent listings from the \
MeowRescue community.",
        heading: "Lost & Found",
        paragraphs: &[
            "If you have lost or found a cat, post a listing with a photo, the \
location, and the date. Our volunteers monitor listings and help match reports \
from the surrounding area.",
        ],
    },
    InfoPage {
        path: "/success-stories",
        title: "Success Stories | MeowRescue",
        description: "Happy endings from MeowRescue adopters: cats who found their \
forever homes.",
        heading: "Success Stories",
        paragraphs: &[
            "Nothing keeps us going like an update from an adopter. Read the stories \
of cats who went from rescue to the couch, and send us yours if a MeowRescue \
cat shares your home.",
        ],
    },
    InfoPage {
        path: "/resources",
        title: "Cat Care Resources | MeowRescue",
        description: "Guides on feline health, behavior, nutrition, and settling a \
new cat into your home.",
        heading: "Cat Care Resources",
        paragraphs: &[
            "Practical guides from our veterinary partners and experienced fosters: \
introducing a new cat, litter box troubleshooting, nutrition basics, and when a \
symptom means a vet visit.",
        ],
    },
    InfoPage {
        path: "/about",
        title: "About Us | MeowRescue",
        description: "MeowRescue is a volunteer-run 501(c)(3) cat rescue placing cats \
in loving homes through adoption and foster care.",
        heading: "About MeowRescue",
        paragraphs: &[
            "MeowRescue was founded by a group of neighbors who kept meeting the same \
problem: healthy, friendly cats with nowhere to go. Today our volunteer network \
spans fosters, transporters, event staff, and adoption counselors.",
            "We are a 501(c)(3) nonprofit. Every animal is fully vetted before \
adoption, and no cat in our care is ever euthanized for space.",
        ],
    },
    InfoPage {
        path: "/contact",
        title: "Contact Us | MeowRescue",
        description: "Reach the MeowRescue team by email or phone with adoption, \
foster, or rescue questions.",
        heading: "Contact Us",
        paragraphs: &[
            "Questions about a cat, an application, or a rescue situation? Email \
info@meowrescue.org or call during business hours and a volunteer will get back \
to you as soon as possible.",
        ],
    },
    InfoPage {
        path: "/faq",
        title: "Frequently Asked Questions | MeowRescue",
        description: "Answers to common questions about adopting, fostering, fees, \
and the MeowRescue process.",
        heading: "Frequently Asked Questions",
        paragraphs: &[
            "How long does an application take? What does the adoption fee cover? \
Can I adopt if I rent? Find answers to the questions we hear most, and contact \
us if yours is not covered.",
        ],
    },
    InfoPage {
        path: "/privacy-policy",
        title: "Privacy Policy | MeowRescue",
        description: "How MeowRescue collects, uses, and protects the information you \
share with us.",
        heading: "Privacy Policy",
        paragraphs: &[
            "We collect only the information needed to process applications and \
donations, we never sell personal data, and you may request deletion of your \
records at any time.",
        ],
    },
    InfoPage {
        path: "/terms-of-service",
        title: "Terms of Service | MeowRescue",
        description: "Terms governing use of the MeowRescue website and services.",
        heading: "Terms of Service",
        paragraphs: &[
            "By using this site you agree to our adoption and donation terms. \
Listings are informational; adoption is subject to application approval and a \
signed contract.",
        ],
    },
];
