use yew::prelude::*;

use crate::components::reveal::REVEAL_CSS;
use crate::components::topic_card::TOPIC_CARD_CSS;
use crate::topics::CATEGORY_CSS;

const BASE_CSS: &str = r#"
:root {
    --foreground: #2d3748;
    --primary: #78B0FF;
    --secondary: #A78BFA;
    --teal: #5EEAD4;
    --light-blue: #EAF4FF;
    --lavender: #D8CAFF;
    --subtle-green: #86EFAC;
}
* {
    box-sizing: border-box;
}
body {
    margin: 0;
    font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    color: var(--foreground);
    background: #F8FBFF;
}
h1, h2, h3 {
    font-family: "Space Grotesk", "Inter", sans-serif;
    margin-top: 0;
}
.page {
    min-height: 100vh;
}
.container {
    max-width: 120rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.page-hero {
    padding: 8rem 1.5rem 5rem;
    background: linear-gradient(135deg, var(--light-blue), rgba(94, 234, 212, 0.3), rgba(216, 202, 255, 0.4));
    text-align: center;
}
.page-hero h1 {
    font-size: 3.5rem;
    margin-bottom: 1.5rem;
}
.page-hero p {
    font-size: 1.25rem;
    color: rgba(45, 55, 72, 0.7);
    max-width: 56rem;
    margin: 0 auto;
    line-height: 1.7;
}
.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    background: rgba(255, 255, 255, 0.7);
    border: 1px solid rgba(120, 176, 255, 0.2);
    border-radius: 999px;
    font-size: 0.875rem;
    margin-bottom: 1.5rem;
}
.section {
    padding: 6rem 1.5rem;
}
.section-white {
    background: #ffffff;
}
.section-soft {
    background: linear-gradient(135deg, #F8FBFF, rgba(234, 244, 255, 0.3));
}
.section-title {
    text-align: center;
    margin-bottom: 4rem;
}
.section-title h2 {
    font-size: 2.75rem;
    margin-bottom: 1rem;
}
.section-title p {
    font-size: 1.125rem;
    color: rgba(45, 55, 72, 0.7);
    max-width: 42rem;
    margin: 0 auto;
}
.banner {
    padding: 6rem 1.5rem;
    background: linear-gradient(135deg, var(--primary), var(--teal), var(--secondary));
    color: #ffffff;
    text-align: center;
}
.banner h2 {
    font-size: 2.75rem;
    margin-bottom: 1.5rem;
}
.banner p {
    font-size: 1.25rem;
    color: rgba(255, 255, 255, 0.9);
    max-width: 48rem;
    margin: 0 auto 2rem;
    line-height: 1.7;
}
.glass-card {
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(16px);
    border: 1px solid rgba(94, 234, 212, 0.2);
    border-radius: 0.75rem;
    padding: 1.5rem;
}
.card-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}
.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.875rem 2rem;
    border-radius: 0.5rem;
    border: none;
    font-size: 1rem;
    font-weight: 500;
    cursor: pointer;
    text-decoration: none;
    transition: all 0.3s ease;
}
.btn-primary {
    background: var(--primary);
    color: #ffffff;
}
.btn-primary:hover {
    background: #6aa3f2;
}
.btn-primary:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}
.btn-light {
    background: #ffffff;
    color: var(--primary);
}
.btn-outline {
    background: transparent;
    border: 2px solid rgba(45, 55, 72, 0.1);
    color: var(--foreground);
}
.spinner {
    display: inline-block;
    width: 3rem;
    height: 3rem;
    border: 4px solid var(--primary);
    border-top-color: transparent;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
.state-message {
    text-align: center;
    padding: 5rem 1rem;
    color: rgba(45, 55, 72, 0.6);
}
.state-message .state-icon {
    font-size: 4rem;
    opacity: 0.2;
}
@media (max-width: 1024px) {
    .card-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
@media (max-width: 768px) {
    .card-grid {
        grid-template-columns: 1fr;
    }
    .page-hero h1 {
        font-size: 2.5rem;
    }
}
"#;

/// Site-wide styles shared by every page.
#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <style>
            { BASE_CSS }
            { REVEAL_CSS }
            { CATEGORY_CSS }
            { TOPIC_CARD_CSS }
        </style>
    }
}
