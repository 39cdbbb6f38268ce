use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scrolled_past;
use crate::Route;

pub fn nav_links() -> [(Route, &'static str); 5] {
    [
        (Route::Home, "Home"),
        (Route::About, "About"),
        (Route::CyberAwareness, "Cyber Awareness"),
        (Route::IpNetworkSafety, "IP & Network Safety"),
        (Route::Contact, "Contact"),
    ]
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(20.0);
    let current = use_route::<Route>();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <div class="nav-logo-mark">{"🛡"}</div>
                    <div class="nav-logo-text">
                        <span class="nav-logo-title">{"Digital Guardian"}</span>
                        <span class="nav-logo-tagline">{"Securing India's Digital Future"}</span>
                    </div>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    {
                        for nav_links().into_iter().map(|(route, label)| {
                            let active = current.as_ref() == Some(&route);
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route>
                                        to={route}
                                        classes={classes!("nav-link", active.then(|| "active"))}
                                    >
                                        {label}
                                    </Link<Route>>
                                </div>
                            }
                        })
                    }
                </nav>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid rgba(94, 234, 212, 0.2);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 30px rgba(0, 0, 0, 0.05);
                }
                .nav-content {
                    max-width: 120rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    color: #2d3748;
                }
                .nav-logo-mark {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #78B0FF, #5EEAD4);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .nav-logo:hover .nav-logo-mark {
                    transform: scale(1.05);
                }
                .nav-logo-text {
                    display: flex;
                    flex-direction: column;
                }
                .nav-logo-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .nav-logo-tagline {
                    font-size: 0.75rem;
                    color: rgba(45, 55, 72, 0.6);
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .nav-link {
                    padding: 0.5rem 1.25rem;
                    border-radius: 0.5rem;
                    color: #2d3748;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .nav-link:hover {
                    background: rgba(94, 234, 212, 0.1);
                    color: #78B0FF;
                }
                .nav-link.active {
                    background: rgba(120, 176, 255, 0.1);
                    color: #78B0FF;
                    font-weight: 500;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #2d3748;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 5rem;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
