//! Public pricing page.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::guard::subscription::{FREE_TIER, is_trialing};
use crate::state::session::{Session, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub tier: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan { tier: FREE_TIER, name: "Free", price: "$0", features: &["10 songs per month", "Personal use"] },
    Plan {
        tier: "pro",
        name: "Pro",
        price: "$10/mo",
        features: &["500 songs per month", "Music videos", "Scheduled posts", "YouTube and TikTok integrations"],
    },
    Plan {
        tier: "premium",
        name: "Premium",
        price: "$30/mo",
        features: &["2,000 songs per month", "Everything in Pro", "Motion capture", "Commercial license"],
    },
];

/// Label for a plan card given the viewer's session.
pub fn plan_badge(session: &Session, plan: &Plan) -> Option<&'static str> {
    if session.user.is_none() {
        return None;
    }
    let current = session.tier().unwrap_or(FREE_TIER);
    if current.eq_ignore_ascii_case(plan.tier) {
        return Some(if is_trialing(session) { "Trial" } else { "Current plan" });
    }
    None
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Title text="Pricing | Cadenza"/>
        <Meta name="description" content="Plans for every creator, from hobbyist to label."/>
        <Link rel="canonical" href="/pricing"/>
        <main class="pricing">
            <h1>"Pick your plan"</h1>
            <p class="pricing__lede">"Every plan starts with a 3-day free trial."</p>
            <div class="pricing__grid">
                {PLANS
                    .iter()
                    .map(|plan| {
                        let badge = move || session.with(|s| plan_badge(&s.session, plan));
                        view! {
                            <section class="pricing__plan">
                                <h2>{plan.name}</h2>
                                <Show when=move || badge().is_some()>
                                    <span class="pricing__badge">{move || badge().unwrap_or_default()}</span>
                                </Show>
                                <p class="pricing__price">{plan.price}</p>
                                <ul>
                                    {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                                </ul>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
