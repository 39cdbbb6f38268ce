use std::cell::Cell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::topic_card::TopicCard;
use crate::config;
use crate::content::use_content;
use crate::topics::{filter_topics, no_results_message, results_heading, TopicListState};
use crate::Route;

#[derive(Properties, PartialEq)]
struct NoResultsProps {
    query: String,
}

#[function_component(NoResults)]
fn no_results(props: &NoResultsProps) -> Html {
    html! {
        <div class="state-message">
            <div class="state-icon">{"⚠"}</div>
            <h3>{"No topics found"}</h3>
            <p>{no_results_message(&props.query)}</p>
        </div>
    }
}

#[function_component(CyberAwareness)]
pub fn cyber_awareness() -> Html {
    let content = use_content();
    let state = use_state(|| TopicListState::Loading);
    let query = use_state(String::new);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let active = Rc::new(Cell::new(true));
                {
                    let active = active.clone();
                    spawn_local(async move {
                        let result = content.fetch_all(config::TOPICS_COLLECTION).await;
                        match &result {
                            Ok(items) => info!("Loaded {} awareness topics", items.len()),
                            Err(e) => error!("Failed to load awareness topics: {}", e),
                        }
                        // page may have been left while the request was in flight
                        if active.get() {
                            state.set(TopicListState::from_fetch(result));
                        }
                    });
                }
                move || active.set(false)
            },
            (),
        );
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let results = match &*state {
        TopicListState::Loading => html! {
            <div class="state-message">
                <div class="spinner"></div>
                <p>{"Loading topics..."}</p>
            </div>
        },
        TopicListState::Error(_) => html! {
            <div class="state-message">
                <div class="state-icon">{"⚠"}</div>
                <h3>{"Topics are unavailable right now"}</h3>
                <p>{"We couldn't reach the awareness library. Please try again later."}</p>
            </div>
        },
        TopicListState::Empty => html! { <NoResults query={(*query).clone()} /> },
        TopicListState::Loaded(topics) => {
            let filtered = filter_topics(topics, &query);
            if filtered.is_empty() {
                html! { <NoResults query={(*query).clone()} /> }
            } else {
                html! {
                    <>
                        <Reveal class="results-heading">
                            <h2>{results_heading(&query, filtered.len())}</h2>
                            <p>{"Click on any topic to learn more about protection strategies"}</p>
                        </Reveal>
                        <div class="card-grid">
                            {
                                for filtered.into_iter().enumerate().map(|(index, topic)| html! {
                                    <TopicCard key={topic.id.clone()} topic={topic.clone()} index={index} />
                                })
                            }
                        </div>
                    </>
                }
            }
        }
    };

    html! {
        <div class="page awareness-page">
            <section class="page-hero">
                <div class="hero-badge">{"⚠ Stay Informed, Stay Safe"}</div>
                <h1>{"Cyber Awareness Topics"}</h1>
                <p>
                    {"Learn about common cyber threats and how to protect yourself from digital fraud, identity theft, and online scams."}
                </p>
                <div class="search-box">
                    <span class="search-icon">{"🔍"}</span>
                    <input
                        type="text"
                        placeholder="Search for threats, topics, or categories..."
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                </div>
            </section>

            <section class="section section-white">
                <div class="container">
                    { results }
                </div>
            </section>

            <section class="banner">
                <Reveal>
                    <div class="banner-icon">{"🛡"}</div>
                    <h2>{"Report a Cyber Threat"}</h2>
                    <p>
                        {"If you've encountered a cyber threat or have been a victim of digital fraud, report it immediately to help protect others."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="btn btn-light">
                        {"Contact Us →"}
                    </Link<Route>>
                </Reveal>
            </section>

            <style>
                {r#"
                .search-box {
                    position: relative;
                    max-width: 42rem;
                    margin: 2rem auto 0;
                }
                .search-icon {
                    position: absolute;
                    left: 1rem;
                    top: 50%;
                    transform: translateY(-50%);
                    opacity: 0.4;
                }
                .search-box input {
                    width: 100%;
                    padding: 1.25rem 1rem 1.25rem 3rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(94, 234, 212, 0.2);
                    background: rgba(255, 255, 255, 0.7);
                    font-size: 1rem;
                }
                .search-box input:focus {
                    outline: 2px solid var(--primary);
                }
                .results-heading {
                    margin-bottom: 3rem;
                }
                .results-heading h2 {
                    font-size: 2rem;
                    margin-bottom: 0.5rem;
                }
                .results-heading p {
                    color: rgba(45, 55, 72, 0.6);
                }
                .banner-icon {
                    font-size: 4rem;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
