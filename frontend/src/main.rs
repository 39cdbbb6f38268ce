use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod entities;
mod content;
mod topics;
mod contact;
mod components {
    pub mod header;
    pub mod footer;
    pub mod reveal;
    pub mod scroll;
    pub mod theme;
    pub mod topic_card;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod cyber_awareness;
    pub mod cyber_awareness_detail;
    pub mod ip_network_safety;
    pub mod contact;
}

use components::{
    header::Header,
    footer::Footer,
    scroll::use_scroll_to_top,
    theme::GlobalStyle,
};
use contact::SimulatedSubmission;
use content::ContentClient;
use pages::{
    home::Home,
    about::About,
    cyber_awareness::CyberAwareness,
    cyber_awareness_detail::CyberAwarenessDetail,
    ip_network_safety::IpNetworkSafety,
    contact::Contact,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/cyber-awareness")]
    CyberAwareness,
    #[at("/cyber-awareness/:id")]
    CyberAwarenessDetail { id: String },
    #[at("/ip-network-safety")]
    IpNetworkSafety,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::CyberAwareness => {
            info!("Rendering Cyber Awareness page");
            html! { <CyberAwareness /> }
        }
        Route::CyberAwarenessDetail { id } => {
            info!("Rendering Cyber Awareness detail page for {}", id);
            html! { <CyberAwarenessDetail id={id} /> }
        }
        Route::IpNetworkSafety => {
            info!("Rendering IP Network Safety page");
            html! { <IpNetworkSafety /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact<SimulatedSubmission> /> }
        }
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

/// Jumps back to the top of the page whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    use_scroll_to_top(path);
    html! {}
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| ContentClient::default(), ());

    html! {
        <ContextProvider<ContentClient> context={(*content).clone()}>
            <BrowserRouter>
                <GlobalStyle />
                <ScrollToTop />
                <Header />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<ContentClient>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting Digital Guardian");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/ip-network-safety"), Some(Route::IpNetworkSafety));
        assert_eq!(Route::recognize("/contact"), Some(Route::Contact));
        assert_eq!(
            Route::recognize("/cyber-awareness/abc123"),
            Some(Route::CyberAwarenessDetail { id: "abc123".into() })
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/cyber-awareness/a/b"), Some(Route::NotFound));
    }

    #[test]
    fn detail_links_carry_the_id() {
        let route = Route::CyberAwarenessDetail { id: "t-9".into() };
        assert_eq!(route.to_path(), "/cyber-awareness/t-9");
    }
}
