use yew::prelude::*;

use crate::components::reveal::Reveal;

struct MonitoringStep {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

struct ProtectionLayer {
    layer: &'static str,
    description: &'static str,
    status: &'static str,
}

struct DashboardCounter {
    label: &'static str,
    value: &'static str,
    icon: &'static str,
}

const MONITORING_STEPS: [MonitoringStep; 4] = [
    MonitoringStep {
        icon: "👁",
        title: "Continuous Monitoring",
        description: "Our systems continuously scan network traffic for suspicious patterns and anomalies.",
        gradient: "grad-primary-teal",
    },
    MonitoringStep {
        icon: "📈",
        title: "Threat Detection",
        description: "Advanced algorithms identify potentially malicious IP addresses and connection attempts.",
        gradient: "grad-teal-secondary",
    },
    MonitoringStep {
        icon: "⚠",
        title: "Risk Assessment",
        description: "Each detected threat is analyzed and assigned a risk level based on multiple factors.",
        gradient: "grad-secondary-lavender",
    },
    MonitoringStep {
        icon: "🔒",
        title: "Automatic Blocking",
        description: "High-risk connections are automatically blocked to prevent unauthorized access.",
        gradient: "grad-primary-secondary",
    },
];

const THREAT_INDICATORS: [&str; 6] = [
    "Multiple failed login attempts from same IP",
    "Unusual geographic location patterns",
    "Known malicious IP databases matches",
    "Suspicious port scanning activity",
    "Abnormal data transfer volumes",
    "Connection attempts to restricted services",
];

const PROTECTION_LAYERS: [ProtectionLayer; 4] = [
    ProtectionLayer {
        layer: "Network Perimeter",
        description: "First line of defense filtering incoming traffic",
        status: "Active",
    },
    ProtectionLayer {
        layer: "Firewall Rules",
        description: "Dynamic rules based on threat intelligence",
        status: "Active",
    },
    ProtectionLayer {
        layer: "Intrusion Detection",
        description: "Real-time monitoring of network behavior",
        status: "Active",
    },
    ProtectionLayer {
        layer: "IP Reputation",
        description: "Global database of known threats",
        status: "Active",
    },
];

// Fixed showcase figures, not wired to any monitoring.
const DASHBOARD: [DashboardCounter; 3] = [
    DashboardCounter { label: "Threats Blocked Today", value: "1,247", icon: "🌐" },
    DashboardCounter { label: "Active Connections", value: "45,892", icon: "📈" },
    DashboardCounter { label: "System Uptime", value: "99.9%", icon: "✔" },
];

#[function_component(IpNetworkSafety)]
pub fn ip_network_safety() -> Html {
    let step_count = MONITORING_STEPS.len();

    html! {
        <div class="page network-page">
            <section class="page-hero">
                <Reveal>
                    <div class="hero-badge">{"🌐 Network Security"}</div>
                    <h1>{"IP & Network Safety"}</h1>
                    <p>
                        {"Understanding how we monitor, detect, and block suspicious network connections to keep your digital identity safe."}
                    </p>
                </Reveal>
            </section>

            <section class="section section-white">
                <Reveal class="section-title">
                    <h2>{"How Network Protection Works"}</h2>
                    <p>{"A multi-layered approach to identifying and blocking cyber threats"}</p>
                </Reveal>
                <div class="steps-grid container">
                    {
                        for MONITORING_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <Reveal delay_ms={(index as u32) * 100} class="step-wrap">
                                <div class="glass-card step-card">
                                    <div class={classes!("step-icon", step.gradient)}>{step.icon}</div>
                                    <span class="step-number">{(index + 1).to_string()}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                                if index + 1 < step_count {
                                    <div class="step-connector"></div>
                                }
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="section section-soft">
                <div class="monitor-layout">
                    <Reveal>
                        <h2>{"What We Monitor"}</h2>
                        <p class="monitor-lead">
                            {"Our advanced monitoring systems track multiple indicators to identify potential threats before they can cause harm."}
                        </p>
                        <ul class="indicator-list">
                            {
                                for THREAT_INDICATORS.iter().map(|indicator| html! {
                                    <li class="indicator">
                                        <span class="indicator-icon">{"⚠"}</span>
                                        <span>{*indicator}</span>
                                    </li>
                                })
                            }
                        </ul>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <div class="glass-card dashboard">
                            <div class="dashboard-header">
                                <h3>{"Live Monitoring Dashboard"}</h3>
                                <span class="dashboard-status">
                                    <span class="status-dot"></span>
                                    {"Active"}
                                </span>
                            </div>
                            {
                                for DASHBOARD.iter().map(|counter| html! {
                                    <div class="dashboard-counter">
                                        <div class="dashboard-counter-head">
                                            <span>{counter.label}</span>
                                            <span>{counter.icon}</span>
                                        </div>
                                        <div class="dashboard-value">{counter.value}</div>
                                    </div>
                                })
                            }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="section section-white">
                <Reveal class="section-title">
                    <h2>{"Multi-Layer Protection"}</h2>
                    <p>{"Multiple security layers work together to provide comprehensive protection"}</p>
                </Reveal>
                <div class="layers">
                    {
                        for PROTECTION_LAYERS.iter().enumerate().map(|(index, layer)| html! {
                            <Reveal delay_ms={(index as u32) * 100}>
                                <div class="glass-card layer-row">
                                    <div>
                                        <div class="layer-title">
                                            <span class="layer-icon">{"🛡"}</span>
                                            <h3>{layer.layer}</h3>
                                        </div>
                                        <p>{layer.description}</p>
                                    </div>
                                    <span class="layer-status">
                                        <span class="status-dot"></span>
                                        {layer.status}
                                    </span>
                                </div>
                            </Reveal>
                        })
                    }
                </div>
            </section>

            <section class="banner">
                <Reveal>
                    <h2>{"Your Safety is Our Priority"}</h2>
                    <p>
                        {"Our network protection systems work silently in the background, 24/7, to ensure that suspicious connections are identified and blocked before they can threaten your digital security. With advanced threat intelligence and real-time monitoring, we keep you safe from evolving cyber threats."}
                    </p>
                </Reveal>
            </section>

            <style>
                {r#"
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .step-wrap {
                    position: relative;
                    height: 100%;
                }
                .step-card {
                    position: relative;
                    height: 100%;
                }
                .step-card p {
                    color: rgba(45, 55, 72, 0.7);
                    line-height: 1.6;
                }
                .step-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .grad-primary-teal { background: linear-gradient(135deg, var(--primary), var(--teal)); }
                .grad-teal-secondary { background: linear-gradient(135deg, var(--teal), var(--secondary)); }
                .grad-secondary-lavender { background: linear-gradient(135deg, var(--secondary), var(--lavender)); }
                .grad-primary-secondary { background: linear-gradient(135deg, var(--primary), var(--secondary)); }
                .step-number {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: rgba(120, 176, 255, 0.1);
                    color: var(--primary);
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step-connector {
                    position: absolute;
                    top: 50%;
                    right: -2rem;
                    width: 2rem;
                    height: 2px;
                    background: linear-gradient(90deg, var(--primary), var(--teal));
                }
                .monitor-layout {
                    max-width: 120rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .monitor-layout h2 {
                    font-size: 2.75rem;
                }
                .monitor-lead {
                    font-size: 1.125rem;
                    color: rgba(45, 55, 72, 0.7);
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .indicator-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .indicator {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                    color: rgba(45, 55, 72, 0.8);
                }
                .indicator-icon {
                    color: var(--primary);
                }
                .dashboard {
                    padding: 2rem;
                    border-radius: 1rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                }
                .dashboard-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 1.5rem;
                }
                .dashboard-header h3 {
                    margin: 0;
                }
                .dashboard-status, .layer-status {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.6);
                    white-space: nowrap;
                }
                .status-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: var(--subtle-green);
                    animation: pulse-dot 2s ease-in-out infinite;
                }
                @keyframes pulse-dot {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .dashboard-counter {
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, rgba(234, 244, 255, 0.5), rgba(94, 234, 212, 0.1));
                    margin-bottom: 1rem;
                }
                .dashboard-counter-head {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: rgba(45, 55, 72, 0.6);
                    margin-bottom: 0.5rem;
                }
                .dashboard-value {
                    font-size: 2.25rem;
                    font-weight: 700;
                }
                .layers {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .layer-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }
                .layer-title {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .layer-title h3 {
                    margin: 0;
                }
                .layer-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, var(--primary), var(--teal));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .layer-row p {
                    margin-left: 3.5rem;
                    color: rgba(45, 55, 72, 0.7);
                }
                @media (max-width: 1024px) {
                    .steps-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .step-connector {
                        display: none;
                    }
                    .monitor-layout {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .steps-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
