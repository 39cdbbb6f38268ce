use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Value {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
}

const VALUES: [Value; 6] = [
    Value {
        icon: "🛡",
        title: "Trust & Security",
        description: "Building a foundation of trust through transparent and secure digital practices.",
    },
    Value {
        icon: "👥",
        title: "Citizen-Centric",
        description: "Designed with every Indian citizen in mind, making cyber safety accessible to all.",
    },
    Value {
        icon: "👁",
        title: "Awareness First",
        description: "Empowering citizens with knowledge to recognize and prevent cyber threats.",
    },
    Value {
        icon: "♥",
        title: "Public Service",
        description: "Committed to serving the public interest and protecting digital rights.",
    },
    Value {
        icon: "⚡",
        title: "Rapid Response",
        description: "Quick identification and mitigation of emerging cyber threats.",
    },
    Value {
        icon: "🎯",
        title: "Precision Protection",
        description: "Targeted solutions for specific threats facing Indian citizens.",
    },
];

const MILESTONES: [Milestone; 4] = [
    Milestone { year: "2024", title: "Initiative Launch", description: "Digital Guardian platform goes live" },
    Milestone { year: "2025", title: "1M Users", description: "Reached one million protected citizens" },
    Milestone { year: "2025", title: "National Coverage", description: "Expanded to all states and territories" },
    Milestone { year: "2026", title: "AI Integration", description: "Advanced threat detection systems deployed" },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <section class="page-hero">
                <Reveal>
                    <div class="hero-badge">{"🎯 About Our Mission"}</div>
                    <h1>{"Protecting India's Digital Identity"}</h1>
                    <p>
                        {"A public service initiative dedicated to empowering Indian citizens with the knowledge and tools to navigate the digital world safely and securely."}
                    </p>
                </Reveal>
            </section>

            <section class="section section-white">
                <div class="about-mission">
                    <Reveal>
                        <h2>{"Our Mission"}</h2>
                        <p>
                            {"In an increasingly connected world, digital safety has become as essential as physical safety. The Digital Guardian initiative was born from the recognition that every Indian citizen deserves to participate in the digital economy without fear of fraud, identity theft, or cyber exploitation."}
                        </p>
                        <p>
                            {"We work tirelessly to educate citizens about emerging cyber threats, from SIM fraud and scam calls to sophisticated phishing attacks and identity misuse. Our approach combines cutting-edge technology with clear, accessible communication to ensure that digital safety is within everyone's reach."}
                        </p>
                        <p>
                            {"Through partnerships with telecom providers, law enforcement agencies, and cybersecurity experts, we create a comprehensive shield against digital threats while respecting privacy and individual rights."}
                        </p>
                    </Reveal>
                    <div class="about-pillars">
                        <Reveal delay_ms={100}>
                            <div class="glass-card pillar">
                                <h3>{"Vision"}</h3>
                                <p>
                                    {"A digitally empowered India where every citizen can safely access online services, conduct digital transactions, and protect their personal information with confidence."}
                                </p>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={200}>
                            <div class="glass-card pillar">
                                <h3>{"Commitment"}</h3>
                                <p>
                                    {"We are committed to providing free, accessible, and actionable cyber safety information to all Indians, regardless of their technical expertise or digital literacy level."}
                                </p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="section section-soft">
                <Reveal class="section-title">
                    <h2>{"Our Core Values"}</h2>
                    <p>{"The principles that guide our mission to protect India's digital future"}</p>
                </Reveal>
                <div class="card-grid container">
                    {
                        for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <Reveal delay_ms={(index as u32) * 100}>
                                <div class="glass-card value-card">
                                    <div class="value-icon">{value.icon}</div>
                                    <h3>{value.title}</h3>
                                    <p>{value.description}</p>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="section section-white">
                <Reveal class="section-title">
                    <h2>{"Our Journey"}</h2>
                    <p>{"Key milestones in our mission to secure India's digital landscape"}</p>
                </Reveal>
                <div class="timeline">
                    {
                        for MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                            <Reveal
                                delay_ms={(index as u32) * 100}
                                class={classes!("timeline-row", (index % 2 == 1).then(|| "reverse"))}
                            >
                                <div class="timeline-card glass-card">
                                    <h3>{milestone.title}</h3>
                                    <p>{milestone.description}</p>
                                </div>
                                <div class="timeline-year">{milestone.year}</div>
                                <div class="timeline-spacer"></div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="banner">
                <Reveal>
                    <h2>{"Making a Real Difference"}</h2>
                    <p>
                        {"Every day, we help thousands of Indian citizens recognize threats, protect their identities, and navigate the digital world with confidence. Together, we're building a safer digital India for everyone."}
                    </p>
                </Reveal>
            </section>

            <style>
                {r#"
                .about-mission {
                    max-width: 120rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-mission h2 {
                    font-size: 2.75rem;
                }
                .about-mission p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(45, 55, 72, 0.8);
                }
                .about-pillars {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .pillar {
                    padding: 2rem;
                    background: linear-gradient(135deg, rgba(120, 176, 255, 0.1), rgba(94, 234, 212, 0.1));
                }
                .pillar p, .value-card p, .timeline-card p {
                    color: rgba(45, 55, 72, 0.7);
                    line-height: 1.6;
                }
                .value-card {
                    height: 100%;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .value-card:hover {
                    transform: scale(1.02);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .value-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, var(--primary), var(--teal));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                }
                .timeline {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .timeline-row {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .timeline-row.reverse {
                    flex-direction: row-reverse;
                }
                .timeline-card, .timeline-spacer {
                    flex: 1;
                }
                .timeline-row:not(.reverse) .timeline-card {
                    text-align: right;
                }
                .timeline-year {
                    width: 5rem;
                    height: 5rem;
                    flex-shrink: 0;
                    border-radius: 50%;
                    background: linear-gradient(135deg, var(--primary), var(--teal));
                    color: #ffffff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                @media (max-width: 1024px) {
                    .about-mission {
                        grid-template-columns: 1fr;
                    }
                    .timeline-row, .timeline-row.reverse {
                        flex-direction: column;
                    }
                    .timeline-row:not(.reverse) .timeline-card {
                        text-align: left;
                    }
                    .timeline-spacer {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
