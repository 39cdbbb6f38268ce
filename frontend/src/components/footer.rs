use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="footer-brand-row">
                        <div class="nav-logo-mark">{"🛡"}</div>
                        <span class="footer-brand-name">{"Digital Guardian"}</span>
                    </div>
                    <p>{"Empowering Indian citizens with cyber safety awareness and digital identity protection."}</p>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About"}</Link<Route>></li>
                        <li><Link<Route> to={Route::CyberAwareness}>{"Cyber Awareness"}</Link<Route>></li>
                        <li><Link<Route> to={Route::IpNetworkSafety}>{"IP & Network Safety"}</Link<Route>></li>
                    </ul>
                </div>

                <div>
                    <h3>{"Contact Info"}</h3>
                    <ul>
                        <li>{"✉ support@digitalguardian.gov.in"}</li>
                        <li>{"☎ 1800-XXX-XXXX (Toll Free)"}</li>
                        <li>{"⌖ New Delhi, India"}</li>
                    </ul>
                </div>

                <div>
                    <h3>{"Follow Us"}</h3>
                    <div class="footer-social">
                        <a href="https://twitter.com" target="_blank" rel="noopener noreferrer" aria-label="Twitter">{"X"}</a>
                        <a href="https://linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                        <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"f"}</a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} Digital Guardian Initiative. All rights reserved.", year)}</p>
                <p class="footer-disclaimer">
                    <strong>{"Disclaimer:"}</strong>
                    {" This website is for educational and awareness purposes. Information provided should not be considered as legal or professional advice. Always verify with official government sources."}
                </p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: linear-gradient(135deg, #EAF4FF, rgba(94, 234, 212, 0.2), rgba(216, 202, 255, 0.3));
                    border-top: 1px solid rgba(94, 234, 212, 0.2);
                    padding: 4rem 1.5rem 2rem;
                    color: #2d3748;
                }
                .footer-grid {
                    max-width: 120rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-brand-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .footer-brand-name {
                    font-size: 1.125rem;
                    font-weight: 700;
                }
                .site-footer h3 {
                    font-size: 1rem;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer li {
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.7);
                }
                .site-footer a {
                    color: rgba(45, 55, 72, 0.7);
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #78B0FF;
                }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                }
                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-bottom {
                    max-width: 120rem;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(94, 234, 212, 0.2);
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.6);
                }
                .footer-disclaimer {
                    font-size: 0.75rem;
                    max-width: 42rem;
                    text-align: right;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        text-align: center;
                    }
                    .footer-disclaimer {
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
