use crate::pages::{BomPage, HomePage, NotFound, TeamPage};
use hush_content::{LOGO_SRC, SITE_METADATA};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let meta = SITE_METADATA;

    view! {
      <Html lang=meta.language/>
      <Title text=meta.title/>
      <Meta name="description" content=meta.description/>
      <Meta property="og:title" content=meta.title/>
      <Meta property="og:description" content=meta.description/>
      <Meta property="og:url" content=meta.canonical_url/>
      <Meta property="og:site_name" content=meta.site_name/>
      <Meta property="og:type" content="website"/>
      <Link rel="canonical" href=meta.canonical_url/>
      <Link rel="icon" href=LOGO_SRC/>

      <Router>
        <Routes>
          <Route path="/" view=HomePage/>
          <Route path="/team" view=TeamPage/>
          <Route path="/bom" view=BomPage/>
          <Route path="/*any" view=NotFound/>
        </Routes>
      </Router>
    }
}
