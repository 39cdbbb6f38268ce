use std::cell::Cell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::topic_card::CategoryBadge;
use crate::config;
use crate::content::use_content;
use crate::entities::CyberAwarenessTopic;
use crate::topics::DetailState;
use crate::Route;

const DETAIL_FALLBACK: &str = "Detailed information about this cyber threat will be available soon. Please check back later for comprehensive guidance on how to protect yourself.";

const QUICK_TIPS: [&str; 4] = [
    "Stay vigilant and verify all suspicious communications",
    "Never share sensitive information over phone or email",
    "Report suspicious activity immediately",
    "Keep your software and security systems updated",
];

#[derive(Properties, PartialEq)]
pub struct CyberAwarenessDetailProps {
    pub id: String,
}

#[function_component(CyberAwarenessDetail)]
pub fn cyber_awareness_detail(props: &CyberAwarenessDetailProps) -> Html {
    let content = use_content();
    let state = use_state(|| DetailState::Loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |id: &String| {
                let id = id.clone();
                let active = Rc::new(Cell::new(true));
                state.set(DetailState::Loading);
                {
                    let active = active.clone();
                    spawn_local(async move {
                        let lookup = content.fetch_by_id(config::TOPICS_COLLECTION, &id).await;
                        let all = match &lookup {
                            Ok(_) => {
                                info!("Loaded awareness topic {}", id);
                                content.fetch_all(config::TOPICS_COLLECTION).await
                            }
                            Err(e) if e.is_not_found() => {
                                warn!("Awareness topic {} does not exist", id);
                                Err(e.clone())
                            }
                            Err(e) => {
                                error!("Failed to load awareness topic {}: {}", id, e);
                                Err(e.clone())
                            }
                        };
                        if let (Ok(_), Err(e)) = (&lookup, &all) {
                            error!("Failed to load related topics: {}", e);
                        }
                        if active.get() {
                            state.set(DetailState::from_lookup(lookup, all, config::RELATED_TOPICS_LIMIT));
                        }
                    });
                }
                move || active.set(false)
            },
            props.id.clone(),
        );
    }

    match &*state {
        DetailState::Loading => html! {
            <div class="page detail-loading">
                <div class="state-message">
                    <div class="spinner"></div>
                    <p>{"Loading topic details..."}</p>
                </div>
            </div>
        },
        DetailState::NotFound => html! {
            <div class="page">
                <div class="state-message not-found">
                    <div class="state-icon">{"⚠"}</div>
                    <h2>{"Topic Not Found"}</h2>
                    <p>{"The topic you're looking for doesn't exist."}</p>
                    <Link<Route> to={Route::CyberAwareness} classes="btn btn-primary">
                        {"← Back to Topics"}
                    </Link<Route>>
                </div>
            </div>
        },
        DetailState::Unavailable(_) => html! {
            <div class="page">
                <div class="state-message not-found">
                    <div class="state-icon">{"⚠"}</div>
                    <h2>{"Topic Unavailable"}</h2>
                    <p>{"We couldn't reach the awareness library. Please try again later."}</p>
                    <Link<Route> to={Route::CyberAwareness} classes="btn btn-primary">
                        {"← Back to Topics"}
                    </Link<Route>>
                </div>
            </div>
        },
        DetailState::Loaded { topic, related } => html! {
            <TopicDetail topic={topic.clone()} related={related.clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct TopicDetailProps {
    topic: CyberAwarenessTopic,
    related: Vec<CyberAwarenessTopic>,
}

#[function_component(TopicDetail)]
fn topic_detail(props: &TopicDetailProps) -> Html {
    let topic = &props.topic;

    html! {
        <div class="page detail-page">
            <section class="detail-hero">
                <div class="container">
                    <Link<Route> to={Route::CyberAwareness} classes="back-link">
                        {"← Back to All Topics"}
                    </Link<Route>>
                    <div class="detail-meta">
                        <CategoryBadge category={topic.threat_category.clone()} large=true />
                        if let Some(date) = topic.last_updated_long() {
                            <span class="detail-date">{format!("📅 Updated {}", date)}</span>
                        }
                    </div>
                    <h1>{topic.topic_name.clone().unwrap_or_default()}</h1>
                    <p class="detail-lead">{topic.short_description.clone().unwrap_or_default()}</p>
                </div>
            </section>

            if let Some(image) = &topic.topic_image {
                <section class="section-white detail-image-section">
                    <Reveal class="container">
                        <div class="detail-image">
                            <img src={image.clone()} alt={topic.name_or("Cyber threat illustration").to_string()} width="1200" />
                        </div>
                    </Reveal>
                </section>
            }

            <section class="section section-white">
                <div class="detail-layout container">
                    <Reveal class="detail-main">
                        <div class="glass-card detail-body">
                            <h2>{"Detailed Information"}</h2>
                            <div class="detail-text">
                                {topic.detailed_content.clone().unwrap_or_else(|| DETAIL_FALLBACK.to_string())}
                            </div>
                        </div>
                    </Reveal>
                    <div class="detail-sidebar">
                        <Reveal>
                            <div class="glass-card tips-card">
                                <h3>{"🛡 Quick Protection Tips"}</h3>
                                <ul>
                                    {
                                        for QUICK_TIPS.iter().map(|tip| html! {
                                            <li><span class="tip-check">{"✔"}</span>{*tip}</li>
                                        })
                                    }
                                </ul>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={100}>
                            <div class="glass-card">
                                <h3>{"Need Help?"}</h3>
                                <p>{"If you've encountered this threat or need assistance, our team is here to help."}</p>
                                <Link<Route> to={Route::Contact} classes="btn btn-primary btn-block">
                                    {"Contact Support"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            if !props.related.is_empty() {
                <section class="section section-soft">
                    <div class="container">
                        <Reveal class="related-heading">
                            <h2>{"Related Topics"}</h2>
                            <p>{"Learn more about similar cyber threats"}</p>
                        </Reveal>
                        <div class="card-grid">
                            {
                                for props.related.iter().enumerate().map(|(index, related)| html! {
                                    <Reveal key={related.id.clone()} delay_ms={index as u32 * config::REVEAL_STAGGER_MS}>
                                        <Link<Route>
                                            to={Route::CyberAwarenessDetail { id: related.id.clone() }}
                                            classes="topic-card-link"
                                        >
                                            <div class="glass-card related-card">
                                                <h3>{related.topic_name.clone().unwrap_or_default()}</h3>
                                                <p>{related.short_description.clone().unwrap_or_default()}</p>
                                                <span class="topic-card-more">{"Learn More →"}</span>
                                            </div>
                                        </Link<Route>>
                                    </Reveal>
                                })
                            }
                        </div>
                    </div>
                </section>
            }

            <style>
                {r#"
                .detail-loading {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .not-found {
                    padding-top: 8rem;
                }
                .detail-hero {
                    padding: 8rem 1.5rem 3rem;
                    background: linear-gradient(135deg, var(--light-blue), rgba(94, 234, 212, 0.3), rgba(216, 202, 255, 0.4));
                }
                .back-link {
                    display: inline-block;
                    color: rgba(45, 55, 72, 0.7);
                    text-decoration: none;
                    margin-bottom: 1.5rem;
                }
                .back-link:hover {
                    color: var(--primary);
                }
                .detail-meta {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .detail-date {
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.6);
                }
                .detail-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                }
                .detail-lead {
                    font-size: 1.25rem;
                    line-height: 1.7;
                    color: rgba(45, 55, 72, 0.7);
                    max-width: 56rem;
                }
                .detail-image-section {
                    padding: 3rem 1.5rem 0;
                }
                .detail-image {
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 1px solid rgba(94, 234, 212, 0.2);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .detail-image img {
                    width: 100%;
                    height: 500px;
                    object-fit: cover;
                    display: block;
                }
                .detail-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }
                .detail-body {
                    padding: 2rem;
                }
                .detail-text {
                    white-space: pre-line;
                    line-height: 1.7;
                    color: rgba(45, 55, 72, 0.8);
                }
                .detail-sidebar {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .tips-card {
                    background: linear-gradient(135deg, rgba(120, 176, 255, 0.1), rgba(94, 234, 212, 0.1), rgba(216, 202, 255, 0.1));
                }
                .tips-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .tips-card li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.8);
                }
                .tip-check {
                    color: var(--subtle-green);
                }
                .btn-block {
                    width: 100%;
                    justify-content: center;
                }
                .related-heading {
                    margin-bottom: 3rem;
                }
                .related-card {
                    height: 100%;
                    transition: transform 0.3s ease;
                }
                .related-card:hover {
                    transform: scale(1.02);
                }
                .related-card p {
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.7);
                }
                @media (max-width: 1024px) {
                    .detail-layout {
                        grid-template-columns: 1fr;
                    }
                    .detail-hero h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
