//! Page shell rendering.
//!
//! Every route serves the same document skeleton: a title, links to every
//! routed view and a mount point tagged with the resolved view. What goes
//! inside the mount point belongs to the client bundle.

use maud::{html, Markup, DOCTYPE};

use crate::routing::{Router, View};

/// Everything the shell needs besides the view.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub router: &'a Router,
    pub site_title: &'a str,
    pub script_src: Option<&'a str>,
}

/// Render the document for `view`; `None` renders an empty mount point.
pub fn render(ctx: &PageContext<'_>, view: Option<View>) -> Markup {
    let title = match view {
        Some(view) => format!("{} · {}", view.title(), ctx.site_title),
        None => ctx.site_title.to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body {
                (navigation(ctx, view))
                @match view {
                    Some(view) => {
                        main id="app" data-view=(view.id()) {}
                    }
                    None => {
                        main id="app" {}
                    }
                }
                @if let Some(src) = ctx.script_src {
                    script type="module" src=(src) {}
                }
            }
        }
    }
}

fn navigation(ctx: &PageContext<'_>, current: Option<View>) -> Markup {
    html! {
        nav {
            ul {
                @for view in View::ALL {
                    @if let Some(href) = ctx.router.href_for(view) {
                        li {
                            @if current == Some(view) {
                                a href=(href) aria-current="page" { (view.title()) }
                            } @else {
                                a href=(href) { (view.title()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
