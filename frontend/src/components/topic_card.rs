use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::entities::CyberAwarenessTopic;
use crate::topics::CategoryStyle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct CategoryBadgeProps {
    pub category: Option<String>,
    #[prop_or_default]
    pub large: bool,
}

/// Coloured pill for a threat category. Renders nothing without a category.
#[function_component(CategoryBadge)]
pub fn category_badge(props: &CategoryBadgeProps) -> Html {
    match &props.category {
        Some(category) => {
            let style = CategoryStyle::for_category(Some(category));
            html! {
                <span class={classes!("category-badge", style.class(), props.large.then(|| "large"))}>
                    {category.clone()}
                </span>
            }
        }
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TopicCardProps {
    pub topic: CyberAwarenessTopic,
    pub index: usize,
}

#[function_component(TopicCard)]
pub fn topic_card(props: &TopicCardProps) -> Html {
    let topic = &props.topic;
    let updated = topic
        .last_updated_short()
        .unwrap_or_else(|| "Recently updated".to_string());

    html! {
        <Reveal delay_ms={props.index as u32 * config::REVEAL_STAGGER_MS}>
            <Link<Route> to={Route::CyberAwarenessDetail { id: topic.id.clone() }} classes="topic-card-link">
                <div class="topic-card">
                    if let Some(image) = &topic.topic_image {
                        <div class="topic-card-image">
                            <img src={image.clone()} alt={topic.name_or("Cyber threat topic").to_string()} loading="lazy" width="400" />
                        </div>
                    }
                    <div class="topic-card-body">
                        if topic.threat_category.is_some() {
                            <div class="topic-card-badge">
                                <CategoryBadge category={topic.threat_category.clone()} />
                            </div>
                        }
                        <h3>{topic.topic_name.clone().unwrap_or_default()}</h3>
                        <p class="topic-card-summary">{topic.short_description.clone().unwrap_or_default()}</p>
                        <div class="topic-card-footer">
                            <span class="topic-card-date">{updated}</span>
                            <span class="topic-card-more">{"Learn More →"}</span>
                        </div>
                    </div>
                </div>
            </Link<Route>>
        </Reveal>
    }
}

pub const TOPIC_CARD_CSS: &str = r#"
.topic-card-link {
    text-decoration: none;
    color: inherit;
    display: block;
    height: 100%;
}
.topic-card {
    height: 100%;
    display: flex;
    flex-direction: column;
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(16px);
    border: 1px solid rgba(94, 234, 212, 0.2);
    border-radius: 0.75rem;
    overflow: hidden;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.topic-card:hover {
    transform: scale(1.02);
    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
}
.topic-card-image {
    height: 12rem;
    overflow: hidden;
    background: linear-gradient(135deg, var(--light-blue), rgba(94, 234, 212, 0.3));
}
.topic-card-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}
.topic-card:hover .topic-card-image img {
    transform: scale(1.1);
}
.topic-card-body {
    padding: 1.5rem;
    flex: 1;
    display: flex;
    flex-direction: column;
}
.topic-card-badge {
    margin-bottom: 1rem;
}
.topic-card h3 {
    font-size: 1.25rem;
    margin-bottom: 0.75rem;
    transition: color 0.3s ease;
}
.topic-card:hover h3 {
    color: var(--primary);
}
.topic-card-summary {
    flex: 1;
    color: rgba(45, 55, 72, 0.7);
    line-height: 1.6;
}
.topic-card-footer {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 1rem;
    border-top: 1px solid rgba(94, 234, 212, 0.1);
    font-size: 0.875rem;
}
.topic-card-date {
    color: rgba(45, 55, 72, 0.5);
}
.topic-card-more {
    color: var(--primary);
    font-weight: 500;
}
.category-badge.large {
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
}
"#;
