use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::scroll::{use_page_scroll_fraction, ScrollProgress};
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

struct Stat {
    value: &'static str,
    label: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡",
        title: "SIM Fraud Protection",
        description: "Advanced protocols to detect and prevent unauthorized SIM swaps, ensuring your mobile identity remains solely yours.",
    },
    Feature {
        icon: "⚠",
        title: "Scam Call Awareness",
        description: "Real-time identification of fraudulent caller IDs, empowering citizens to recognize and report deceptive communications.",
    },
    Feature {
        icon: "🔒",
        title: "Digital Identity Security",
        description: "Comprehensive safeguards for your personal data, utilizing next-gen encryption to prevent identity misuse.",
    },
    Feature {
        icon: "🌐",
        title: "Network Threat Monitoring",
        description: "24/7 surveillance of network traffic to identify, isolate, and neutralize suspicious IP connections before they reach you.",
    },
];

// Display copy only, nothing measures these.
const STATS: [Stat; 4] = [
    Stat { value: "10M+", label: "Citizens Protected" },
    Stat { value: "500K+", label: "Threats Blocked" },
    Stat { value: "24/7", label: "Active Monitoring" },
    Stat { value: "99.9%", label: "System Uptime" },
];

const SAFETY_TIPS: [&str; 5] = [
    "Never share OTP or PIN with anyone, including bank officials",
    "Verify caller identity before sharing any personal information",
    "Enable two-factor authentication on all important accounts",
    "Regularly monitor your bank statements for suspicious activity",
    "Report suspicious calls or messages to cybercrime authorities",
];

const TRAFFIC_DOTS: usize = 8;

#[function_component(Home)]
pub fn home() -> Html {
    let progress = use_page_scroll_fraction();

    html! {
        <div class="page home-page">
            <div class="scroll-progress-bar" style={format!("transform: scaleX({:.4});", progress)}></div>

            // Hero
            <section class="home-hero">
                <div class="home-hero-grid">
                    <div class="home-hero-copy">
                        <Reveal>
                            <div class="hero-badge">
                                <span class="pulse-dot"></span>
                                <span class="hero-badge-text">{"Official Digital India Initiative"}</span>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={100}>
                            <h1>
                                {"Securing India's "}<br />
                                <span class="text-gradient">{"Digital Future"}</span>
                            </h1>
                        </Reveal>
                        <Reveal delay_ms={200}>
                            <p class="home-hero-lead">
                                {"A unified shield for every citizen. Empowering you with the knowledge and tools to navigate the digital world with absolute confidence."}
                            </p>
                        </Reveal>
                        <Reveal delay_ms={300}>
                            <div class="home-hero-actions">
                                <Link<Route> to={Route::CyberAwareness} classes="btn btn-dark">
                                    {"Start Learning →"}
                                </Link<Route>>
                                <Link<Route> to={Route::About} classes="btn btn-outline">
                                    {"Our Mission"}
                                </Link<Route>>
                            </div>
                        </Reveal>
                    </div>

                    <ScrollProgress class="home-hero-visual">
                        <div class="floating-card glass-panel">
                            <div class="floating-card-top">
                                <span class="floating-shield">{"🛡"}</span>
                            </div>
                            <div class="floating-card-body">
                                <div class="skeleton-line short"></div>
                                <div class="skeleton-line"></div>
                                <div class="skeleton-line three-quarter"></div>
                                <div class="system-status">
                                    <span class="status-check">{"✔"}</span>
                                    <div>
                                        <div class="status-title">{"System Secure"}</div>
                                        <div class="status-sub">{"Last scan: Just now"}</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                        <div class="floating-chip chip-lock">{"🔒"}</div>
                        <div class="floating-chip chip-network">{"🌐"}</div>
                    </ScrollProgress>
                </div>
            </section>

            // Stats
            <section class="stats-ticker">
                <div class="stats-grid">
                    {
                        for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <Reveal delay_ms={(index as u32) * 100} class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            // Mission
            <section class="section section-white mission">
                <div class="mission-grid">
                    <div>
                        <Reveal>
                            <h2>{"Building a "}<br /><span class="text-gradient">{"Safer Digital"}</span><br />{"Ecosystem"}</h2>
                        </Reveal>
                        <Reveal delay_ms={100}>
                            <p>
                                {"In an era where our lives are increasingly digital, security isn't just a feature, it's a fundamental right. We are dedicated to creating a transparent, robust, and citizen-centric safety net."}
                            </p>
                            <p>
                                {"From protecting your mobile identity to securing the networks that connect us, our mission is to stay one step ahead of threats, ensuring that technology remains a tool for empowerment, not exploitation."}
                            </p>
                        </Reveal>
                    </div>
                    <ScrollProgress class="mission-visual">
                        <img
                            src="https://static.wixstatic.com/media/8c74af_6654007cc0b24076b087ccca2e53ba52~mv2.png?originWidth=1152&originHeight=576"
                            alt="Digital network visualization representing connectivity and security"
                            loading="lazy"
                        />
                    </ScrollProgress>
                </div>
            </section>

            // Core protections
            <section class="section section-soft">
                <div class="features-layout">
                    <div class="features-sticky">
                        <Reveal>
                            <span class="eyebrow">{"Core Protections"}</span>
                            <h2>{"Comprehensive "}<br />{"Cyber Defense"}</h2>
                            <p>{"Our multi-layered approach ensures that every aspect of your digital life is guarded against evolving threats."}</p>
                            <Link<Route> to={Route::CyberAwareness} classes="btn btn-outline">
                                {"Explore Topics →"}
                            </Link<Route>>
                        </Reveal>
                    </div>
                    <div class="features-list">
                        {
                            for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                <Reveal delay_ms={(index as u32) * 50}>
                                    <div class="feature-card glass-card">
                                        <div class="feature-icon">{feature.icon}</div>
                                        <div>
                                            <h3>{feature.title}</h3>
                                            <p>{feature.description}</p>
                                        </div>
                                    </div>
                                </Reveal>
                            })
                        }
                    </div>
                </div>
            </section>

            // Threat blocking visual, purely illustrative
            <section class="threat-demo">
                <div class="threat-demo-grid-bg"></div>
                <Reveal class="section-title">
                    <h2>{"Intelligent Threat Blocking"}</h2>
                    <p>{"Visualizing how our network filters identify and neutralize suspicious connections in real-time."}</p>
                </Reveal>
                <div class="threat-stage">
                    <div class="threat-shield">
                        {"🛡"}
                        <div class="threat-shield-ping"></div>
                    </div>
                    {
                        for (0..TRAFFIC_DOTS).map(|i| html! {
                            <div
                                key={format!("threat-{}", i)}
                                class="dot dot-threat"
                                style={format!("animation-delay: {:.1}s;", i as f64 * 0.5)}
                            ></div>
                        })
                    }
                    {
                        for (0..TRAFFIC_DOTS).map(|i| html! {
                            <div
                                key={format!("safe-{}", i)}
                                class="dot dot-safe"
                                style={format!("animation-delay: {:.1}s;", i as f64 * 0.6)}
                            ></div>
                        })
                    }
                    <div class="traffic-label left">
                        <div class="traffic-label-title threat">{"Suspicious Traffic"}</div>
                        <div class="traffic-label-sub">{"Blocked automatically"}</div>
                    </div>
                    <div class="traffic-label right">
                        <div class="traffic-label-title safe">{"Verified Traffic"}</div>
                        <div class="traffic-label-sub">{"Allowed securely"}</div>
                    </div>
                </div>
            </section>

            // Safety tips
            <section class="section safety-tips">
                <div class="tips-layout">
                    <Reveal>
                        <h2>{"Essential "}<br />{"Safety Habits"}</h2>
                        <p>{"Cyber safety starts with you. Adopting these simple daily habits can prevent 90% of common digital threats."}</p>
                        <Link<Route> to={Route::CyberAwareness} classes="btn btn-primary">
                            {"View Full Guide"}
                        </Link<Route>>
                    </Reveal>
                    <div class="tips-list">
                        {
                            for SAFETY_TIPS.iter().enumerate().map(|(index, tip)| html! {
                                <Reveal delay_ms={(index as u32) * 100}>
                                    <div class="tip glass-card">
                                        <span class="tip-check">{"✔"}</span>
                                        <span>{*tip}</span>
                                    </div>
                                </Reveal>
                            })
                        }
                    </div>
                </div>
            </section>

            // CTA
            <section class="banner">
                <Reveal>
                    <h2>{"Ready to Secure Your Digital Life?"}</h2>
                    <p>{"Join millions of responsible citizens in creating a safer, more secure digital India."}</p>
                    <div class="home-hero-actions centered">
                        <Link<Route> to={Route::Contact} classes="btn btn-light">
                            {"Get in Touch"}
                        </Link<Route>>
                        <Link<Route> to={Route::CyberAwareness} classes="btn btn-ghost">
                            {"Learn More"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>

            <style>
                {r#"
                .scroll-progress-bar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 4px;
                    background: linear-gradient(90deg, var(--primary), var(--secondary));
                    transform-origin: 0 50%;
                    z-index: 60;
                }
                .text-gradient {
                    background-image: linear-gradient(135deg, #4A5568 0%, #78B0FF 100%);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .glass-panel {
                    background: rgba(255, 255, 255, 0.65);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.5);
                }
                .home-hero {
                    min-height: 100vh;
                    padding: 8rem 1.5rem 4rem;
                    background: linear-gradient(135deg, var(--light-blue), #ffffff, rgba(216, 202, 255, 0.3));
                    display: flex;
                    align-items: center;
                }
                .home-hero-grid {
                    max-width: 120rem;
                    margin: 0 auto;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: center;
                }
                .home-hero h1 {
                    font-size: 5rem;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }
                .home-hero-lead {
                    font-size: 1.5rem;
                    color: rgba(45, 55, 72, 0.7);
                    max-width: 42rem;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }
                .hero-badge-text {
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    font-weight: 500;
                }
                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #4ade80;
                    animation: pulse-soft 2s ease-in-out infinite;
                }
                .home-hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .home-hero-actions.centered {
                    justify-content: center;
                }
                .btn-dark {
                    background: var(--foreground);
                    color: #ffffff;
                    border-radius: 999px;
                    height: 3.5rem;
                }
                .btn-ghost {
                    background: transparent;
                    border: 2px solid rgba(255, 255, 255, 0.6);
                    color: #ffffff;
                }
                .home-hero-visual {
                    position: relative;
                    height: 600px;
                }
                .floating-card {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 400px;
                    height: 500px;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                    overflow: hidden;
                    z-index: 2;
                    transform: translate(-50%, calc(-50% + var(--scroll-progress, 0) * -50px));
                }
                .floating-card-top {
                    height: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(to bottom, rgba(234, 244, 255, 0.5), transparent);
                }
                .floating-shield {
                    font-size: 8rem;
                    animation: float 6s ease-in-out infinite;
                }
                .floating-card-body {
                    padding: 2rem;
                }
                .skeleton-line {
                    height: 0.5rem;
                    border-radius: 999px;
                    background: rgba(45, 55, 72, 0.05);
                    margin-bottom: 0.5rem;
                }
                .skeleton-line.short {
                    width: 6rem;
                    background: rgba(120, 176, 255, 0.2);
                    margin-bottom: 1rem;
                }
                .skeleton-line.three-quarter {
                    width: 75%;
                }
                .system-status {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .status-check {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(94, 234, 212, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .status-title {
                    font-weight: 700;
                    font-size: 0.875rem;
                }
                .status-sub {
                    font-size: 0.75rem;
                    color: rgba(45, 55, 72, 0.5);
                }
                .floating-chip {
                    position: absolute;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(255, 255, 255, 0.4);
                    backdrop-filter: blur(8px);
                    border: 1px solid rgba(174, 226, 255, 0.3);
                    font-size: 2rem;
                }
                .chip-lock {
                    top: 20%;
                    right: 10%;
                    width: 6rem;
                    height: 6rem;
                    z-index: 1;
                    transform: translateY(calc(var(--scroll-progress, 0) * -80px));
                }
                .chip-network {
                    bottom: 20%;
                    left: 10%;
                    width: 5rem;
                    height: 5rem;
                    z-index: 3;
                    transform: translateY(calc(var(--scroll-progress, 0) * -30px));
                }
                @keyframes float {
                    0% { transform: translateY(0px); }
                    50% { transform: translateY(-10px); }
                    100% { transform: translateY(0px); }
                }
                @keyframes pulse-soft {
                    0%, 100% { opacity: 0.5; transform: scale(1); }
                    50% { opacity: 0.8; transform: scale(1.05); }
                }
                .stats-ticker {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid rgba(45, 55, 72, 0.05);
                    border-bottom: 1px solid rgba(45, 55, 72, 0.05);
                    background: rgba(255, 255, 255, 0.5);
                }
                .stats-grid {
                    max-width: 120rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                }
                .stat-label {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: rgba(45, 55, 72, 0.6);
                }
                .mission-grid, .features-layout, .tips-layout {
                    max-width: 120rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .mission h2, .features-sticky h2, .tips-layout h2 {
                    font-size: 3rem;
                    line-height: 1.1;
                }
                .mission p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(45, 55, 72, 0.7);
                }
                .mission-visual {
                    border-radius: 1.5rem;
                    overflow: hidden;
                }
                .mission-visual img {
                    width: 100%;
                    display: block;
                    transform: translateY(calc(var(--scroll-progress, 0) * -100px)) scale(1.2);
                }
                .features-sticky {
                    position: sticky;
                    top: 8rem;
                }
                .eyebrow {
                    display: block;
                    color: var(--primary);
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .features-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .feature-card {
                    display: flex;
                    gap: 1.5rem;
                    padding: 2rem;
                    transition: transform 0.3s ease;
                }
                .feature-card:hover {
                    transform: translateY(-4px);
                }
                .feature-icon {
                    font-size: 2rem;
                    width: 3.5rem;
                    height: 3.5rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: rgba(234, 244, 255, 0.8);
                }
                .threat-demo {
                    position: relative;
                    padding: 8rem 1.5rem;
                    background: var(--foreground);
                    color: #ffffff;
                    overflow: hidden;
                }
                .threat-demo .section-title p {
                    color: rgba(255, 255, 255, 0.7);
                }
                .threat-demo-grid-bg {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    background-image: linear-gradient(rgba(255,255,255,0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255,255,255,0.1) 1px, transparent 1px);
                    background-size: 2rem 2rem;
                }
                .threat-stage {
                    position: relative;
                    height: 400px;
                    max-width: 56rem;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1.5rem;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .threat-shield {
                    position: relative;
                    z-index: 2;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 50%;
                    background: var(--primary);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    box-shadow: 0 0 50px rgba(120, 176, 255, 0.3);
                }
                .threat-shield-ping {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    border: 2px solid var(--primary);
                    opacity: 0.2;
                    animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }
                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }
                .dot {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    border-radius: 50%;
                    opacity: 0;
                    z-index: 1;
                }
                .dot-threat {
                    width: 0.75rem;
                    height: 0.75rem;
                    background: #ef4444;
                    box-shadow: 0 0 10px rgba(239, 68, 68, 0.8);
                    animation: threat-incoming 3s infinite linear;
                }
                .dot-safe {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #2dd4bf;
                    animation: safe-traffic 4s infinite linear;
                }
                @keyframes threat-incoming {
                    0% { transform: translate(-400px, -40px); opacity: 1; }
                    60% { transform: translate(-60px, 0); opacity: 1; }
                    70% { transform: translate(-40px, 0) scale(2); opacity: 0; }
                    100% { opacity: 0; }
                }
                @keyframes safe-traffic {
                    0% { transform: translate(400px, 30px); opacity: 1; }
                    45% { transform: translate(60px, 0); opacity: 1; }
                    55% { transform: translate(-60px, 0); opacity: 1; }
                    100% { transform: translate(-400px, -30px); opacity: 1; }
                }
                .traffic-label {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                }
                .traffic-label.left {
                    left: 2rem;
                }
                .traffic-label.right {
                    right: 2rem;
                    text-align: right;
                }
                .traffic-label-title {
                    font-weight: 700;
                    font-size: 0.875rem;
                    margin-bottom: 0.25rem;
                }
                .traffic-label-title.threat {
                    color: #f87171;
                }
                .traffic-label-title.safe {
                    color: #2dd4bf;
                }
                .traffic-label-sub {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                .safety-tips {
                    background: linear-gradient(to bottom, #ffffff, rgba(234, 244, 255, 0.2));
                }
                .tips-layout p {
                    font-size: 1.125rem;
                    color: rgba(45, 55, 72, 0.7);
                    margin-bottom: 2rem;
                }
                .tips-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .tip {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .tip-check {
                    color: var(--subtle-green);
                }
                @media (max-width: 1024px) {
                    .home-hero-grid, .mission-grid, .features-layout, .tips-layout {
                        grid-template-columns: 1fr;
                    }
                    .home-hero-visual {
                        display: none;
                    }
                    .home-hero h1 {
                        font-size: 3.5rem;
                    }
                    .features-sticky {
                        position: static;
                    }
                }
                @media (max-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .traffic-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
