//! The built-in MeowRescue site renderer.

use meowssg_backend::{BackendClient, BlogPostRecord, CatRecord, EventRecord};
use meowssg_kernel::escape;
use meowssg_kernel::fallback::{BRAND, FALLBACK_TITLE, organization_json_ld};
use meowssg_kernel::route::{Route, RouteKind};
use serde_json::{Value, json};

use crate::copy::info_page;
use crate::document::{PageHead, build_document};
use crate::{RenderError, RenderPage, RenderedPage};

/// Site-level settings shared by every rendered page.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub site_url: String,
    /// Build date in `YYYY-MM-DD` form.
    pub build_date: String,
}

/// Renders the MeowRescue pages, prefetching route data from the
/// backend. Without a backend client every listing renders empty.
pub struct SiteRenderer {
    meta: SiteMeta,
    backend: Option<BackendClient>,
}

impl SiteRenderer {
    pub fn new(meta: SiteMeta, backend: Option<BackendClient>) -> Self {
        Self { meta, backend }
    }

    fn head(&self, route: &Route, title: &str, description: &str) -> PageHead {
        PageHead {
            title: title.to_string(),
            description: description.to_string(),
            canonical: route.canonical_url(&self.meta.site_url),
            og_type: "website",
            json_ld: vec![organization_json_ld(&self.meta.site_url)],
            last_modified: self.meta.build_date.clone(),
        }
    }

    async fn cats(&self) -> Result<Vec<CatRecord>, RenderError> {
        match &self.backend {
            Some(client) => Ok(client.list_cats().await?),
            None => Ok(Vec::new()),
        }
    }

    async fn blog_posts(&self) -> Result<Vec<BlogPostRecord>, RenderError> {
        match &self.backend {
            Some(client) => Ok(client.list_blog_posts().await?),
            None => Ok(Vec::new()),
        }
    }

    async fn events(&self) -> Result<Vec<EventRecord>, RenderError> {
        match &self.backend {
            Some(client) => Ok(client.list_events().await?),
            None => Ok(Vec::new()),
        }
    }

    async fn render_home(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        // One route, one prefetch step: the three listings go out
        // concurrently.
        let (cats, posts, events) =
            tokio::join!(self.cats(), self.blog_posts(), self.events());
        let (cats, posts, events) = (cats?, posts?, events?);

        let mut main = String::new();
        main.push_str(&format!(
            "<section class=\"hero\"><h1>Cat Adoption &amp; Foster Care</h1>\
<p>{BRAND} rescues, rehabilitates, and rehomes cats in need. Meet the cats \
waiting for a family, or learn how fostering and donating keeps our doors \
open.</p>\
<p><a class=\"cta\" href=\"/cats\">Meet the Cats</a> \
<a class=\"cta\" href=\"/donate\">Donate</a></p></section>"
        ));
        main.push_str("<section><h2>Adoptable Cats</h2>");
        main.push_str(&cat_cards(&cats, 6));
        main.push_str("</section>");
        main.push_str("<section><h2>Latest from the Blog</h2>");
        main.push_str(&post_list(&posts, 3));
        main.push_str("</section>");
        main.push_str("<section><h2>Upcoming Events</h2>");
        main.push_str(&event_list(&events, 3));
        main.push_str("</section>");

        let state = json!({
            "route": route.path(),
            "queries": {
                "cats": cats,
                "blogPosts": posts,
                "events": events,
            }
        });
        let head = self.head(
            route,
            FALLBACK_TITLE,
            "MeowRescue is a volunteer-run cat rescue nonprofit. Adopt, foster, \
volunteer, or donate to help cats find loving homes.",
        );
        Ok(page(&head, &main, state))
    }

    async fn render_cat_list(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let cats = self.cats().await?;
        let mut main = String::from("<h1>Adoptable Cats</h1>\
<p>Every cat below is vetted, vaccinated, and ready to meet you.</p>");
        main.push_str(&cat_cards(&cats, usize::MAX));
        let state = json!({ "route": route.path(), "queries": { "cats": cats } });
        let head = self.head(
            route,
            "Adoptable Cats | MeowRescue",
            "Browse cats and kittens available for adoption from MeowRescue.",
        );
        Ok(page(&head, &main, state))
    }

    async fn render_cat_detail(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let id: i64 = route
            .last_segment()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;
        let cat = match &self.backend {
            Some(client) => client.fetch_cat(id).await?,
            None => None,
        }
        .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;

        let name = escape::text(&cat.name);
        let description = cat
            .description
            .clone()
            .unwrap_or_else(|| format!("{} is looking for a loving home.", cat.name));

        let mut main = format!("<h1>{name}</h1><dl class=\"cat-facts\">");
        for (label, value) in [
            ("Breed", &cat.breed),
            ("Age", &cat.age_estimate),
            ("Gender", &cat.gender),
            ("Status", &cat.status),
        ] {
            if let Some(value) = value {
                main.push_str(&format!(
                    "<dt>{label}</dt><dd>{}</dd>",
                    escape::text(value)
                ));
            }
        }
        main.push_str("</dl>");
        for photo in cat.photos_urls.iter().flatten() {
            main.push_str(&format!(
                "<img src=\"{}\" alt=\"{name}\" loading=\"lazy\">",
                escape::attr(photo)
            ));
        }
        main.push_str(&format!("<h2>About {name}</h2><p>{}</p>", escape::text(&description)));
        main.push_str(&format!(
            "<p><a class=\"cta\" href=\"/adopt\">Apply to Adopt {name}</a> \
<a href=\"/contact\">Ask About {name}</a></p>"
        ));

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "Product",
            "name": cat.name,
            "description": description,
            "category": "Cat Adoption",
            "image": cat.photos_urls.clone().unwrap_or_default(),
        });
        let state = json!({ "route": route.path(), "queries": { "cat": cat } });
        let mut head = self.head(
            route,
            &format!("{} - Adoptable Cat | {BRAND}", cat.name),
            &format!("Meet {}, available for adoption from {BRAND}. {description}", cat.name),
        );
        head.json_ld.push(json_ld);
        Ok(page(&head, &main, state))
    }

    async fn render_blog_index(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let posts = self.blog_posts().await?;
        let mut main = String::from("<h1>Blog</h1>\
<p>Feline health, behavior, and rescue news from the MeowRescue team.</p>");
        main.push_str(&post_list(&posts, usize::MAX));
        let state = json!({ "route": route.path(), "queries": { "blogPosts": posts } });
        let head = self.head(
            route,
            "Blog | MeowRescue",
            "Cat care advice and rescue stories from MeowRescue.",
        );
        Ok(page(&head, &main, state))
    }

    async fn render_blog_post(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let slug = route
            .last_segment()
            .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;
        let post = match &self.backend {
            Some(client) => client.fetch_blog_post(slug).await?,
            None => None,
        }
        .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;

        let title = escape::text(&post.title);
        let mut main = format!("<article><h1>{title}</h1>");
        if let Some(author) = &post.author {
            main.push_str(&format!("<p class=\"byline\">By {}", escape::text(author)));
            if let Some(published) = &post.published_at {
                main.push_str(&format!(" &middot; {}", escape::text(published)));
            }
            main.push_str("</p>");
        }
        main.push_str("<h2>From the rescue</h2>");
        let body = post
            .content
            .clone()
            .or_else(|| post.excerpt.clone())
            .unwrap_or_default();
        for paragraph in body.split("\n\n").filter(|p| !p.trim().is_empty()) {
            main.push_str(&format!("<p>{}</p>", escape::text(paragraph.trim())));
        }
        main.push_str("</article>");

        let description = post
            .excerpt
            .clone()
            .unwrap_or_else(|| format!("{} — from the {BRAND} blog.", post.title));
        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": post.title,
            "author": post.author,
            "datePublished": post.published_at,
        });
        let state = json!({ "route": route.path(), "queries": { "blogPost": post } });
        let mut head = self.head(
            route,
            &format!("{} | {BRAND} Blog", post.title),
            &description,
        );
        head.og_type = "article";
        head.json_ld.push(json_ld);
        Ok(page(&head, &main, state))
    }

    async fn render_event_list(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let events = self.events().await?;
        let mut main = String::from("<h1>Events</h1>\
<p>Meet adoptable cats in person at our upcoming events.</p>");
        main.push_str(&event_list(&events, usize::MAX));
        let state = json!({ "route": route.path(), "queries": { "events": events } });
        let head = self.head(
            route,
            "Events | MeowRescue",
            "Adoption days, fundraisers, and community events from MeowRescue.",
        );
        Ok(page(&head, &main, state))
    }

    async fn render_event_detail(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let id: i64 = route
            .last_segment()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;
        let event = match &self.backend {
            Some(client) => client.fetch_event(id).await?,
            None => None,
        }
        .ok_or_else(|| RenderError::EntityNotFound(route.path().to_string()))?;

        let title = escape::text(&event.title);
        let mut main = format!("<h1>{title}</h1>");
        if let Some(date) = &event.date_start {
            main.push_str(&format!("<p class=\"when\">{}</p>", escape::text(date)));
        }
        if let Some(location) = &event.location {
            main.push_str(&format!("<p class=\"where\">{}</p>", escape::text(location)));
        }
        main.push_str("<h2>Details</h2>");
        if let Some(description) = &event.description {
            main.push_str(&format!("<p>{}</p>", escape::text(description)));
        }
        main.push_str("<p><a href=\"/events\">All events</a></p>");

        let json_ld = json!({
            "@context": "https://schema.org",
            "@type": "Event",
            "name": event.title,
            "startDate": event.date_start,
            "location": event.location,
        });
        let state = json!({ "route": route.path(), "queries": { "event": event } });
        let mut head = self.head(
            route,
            &format!("{} | {BRAND} Events", event.title),
            &event
                .description
                .clone()
                .unwrap_or_else(|| format!("{} — a {BRAND} event.", event.title)),
        );
        head.json_ld.push(json_ld);
        Ok(page(&head, &main, state))
    }

    fn render_info(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        let Some(info) = info_page(route.path()) else {
            return Err(RenderError::UnknownRoute(route.path().to_string()));
        };
        let mut main = format!("<h1>{}</h1>", escape::text(info.heading));
        for paragraph in info.paragraphs {
            main.push_str(&format!("<p>{}</p>", escape::text(paragraph)));
        }
        main.push_str(&format!(
            "<h2>More ways to help</h2>\
<p>See our <a href=\"/cats\">adoptable cats</a>, \
<a href=\"/volunteer\">volunteer</a>, or \
<a href=\"/donate\">make a donation</a>.</p>"
        ));
        let state = json!({ "route": route.path(), "queries": {} });
        let head = self.head(route, info.title, info.description);
        Ok(page(&head, &main, state))
    }
}

fn page(head: &PageHead, main: &str, state: Value) -> RenderedPage {
    let html = build_document(head, main, &state);
    RenderedPage { html, state }
}

fn cat_cards(cats: &[CatRecord], limit: usize) -> String {
    if cats.is_empty() {
        return "<p>No cats are listed right now. Check back soon, or \
<a href=\"/contact\">contact us</a> about upcoming arrivals.</p>"
            .to_string();
    }
    let mut out = String::from("<div class=\"cat-grid\">");
    for cat in cats.iter().take(limit) {
        let name = escape::text(&cat.name);
        let breed = cat
            .breed
            .as_deref()
            .map(escape::text)
            .unwrap_or_else(|| "Domestic Shorthair".to_string());
        out.push_str(&format!(
            "<article class=\"cat-card\"><h3><a href=\"/cats/{}\">{name}</a></h3>\
<p>{breed}</p></article>",
            cat.id
        ));
    }
    out.push_str("</div>");
    out
}

fn post_list(posts: &[BlogPostRecord], limit: usize) -> String {
    if posts.is_empty() {
        return "<p>No posts yet.</p>".to_string();
    }
    let mut out = String::from("<ul class=\"post-list\">");
    for post in posts.iter().take(limit) {
        out.push_str(&format!(
            "<li><a href=\"/blog/{}\">{}</a></li>",
            escape::attr(&post.slug),
            escape::text(&post.title)
        ));
    }
    out.push_str("</ul>");
    out
}

fn event_list(events: &[EventRecord], limit: usize) -> String {
    if events.is_empty() {
        return "<p>No events scheduled.</p>".to_string();
    }
    let mut out = String::from("<ul class=\"event-list\">");
    for event in events.iter().take(limit) {
        out.push_str(&format!(
            "<li><a href=\"/events/{}\">{}</a>{}</li>",
            event.id,
            escape::text(&event.title),
            event
                .date_start
                .as_deref()
                .map(|d| format!(" — {}", escape::text(d)))
                .unwrap_or_default()
        ));
    }
    out.push_str("</ul>");
    out
}

impl RenderPage for SiteRenderer {
    async fn render(&self, route: &Route) -> Result<RenderedPage, RenderError> {
        match route.kind() {
            RouteKind::Home => self.render_home(route).await,
            RouteKind::CatList => self.render_cat_list(route).await,
            RouteKind::CatDetail => self.render_cat_detail(route).await,
            RouteKind::BlogIndex => self.render_blog_index(route).await,
            RouteKind::BlogPost => self.render_blog_post(route).await,
            RouteKind::EventList => self.render_event_list(route).await,
            RouteKind::EventDetail => self.render_event_detail(route).await,
            RouteKind::Info => self.render_info(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meowssg_kernel::validate::inspect;

    fn renderer() -> SiteRenderer {
        SiteRenderer::new(
            SiteMeta {
                site_url: "https://meowrescue.org".to_string(),
                build_date: "2026-08-07".to_string(),
            },
            None,
        )
    }

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("test runtime should build")
            .block_on(future)
    }

    #[test]
    fn home_renders_head_and_hydration_state() {
        let route = Route::new("/").expect("route should parse");
        let rendered = block_on(renderer().render(&route)).expect("home should render");
        let facts = inspect(&rendered.html, "https://meowrescue.org");
        assert!(facts.has_doctype);
        assert!(facts.has_canonical);
        assert!(facts.has_json_ld);
        assert!(facts.has_hydration_state);
        assert!(facts.has_root_mount);
        assert!(facts.has_h1 && facts.has_h2);
        assert_eq!(rendered.state["route"], "/");
    }

    #[test]
    fn info_page_renders_and_unknown_route_errors() {
        let adopt = Route::new("/adopt").expect("route should parse");
        let rendered = block_on(renderer().render(&adopt)).expect("adopt should render");
        assert!(rendered.html.contains("<h1>Adopt a Cat</h1>"));

        let unknown = Route::new("/no-such-page").expect("route should parse");
        let err = block_on(renderer().render(&unknown)).expect_err("unknown route should fail");
        assert!(matches!(err, RenderError::UnknownRoute(_)));
    }

    #[test]
    fn dynamic_route_without_backend_is_entity_not_found() {
        let route = Route::new("/cats/7").expect("route should parse");
        let err = block_on(renderer().render(&route)).expect_err("detail should fail offline");
        assert!(matches!(err, RenderError::EntityNotFound(_)));
    }
}
