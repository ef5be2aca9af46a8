//! Non-dismissible upgrade modal shown over paid features.
//!
//! There is deliberately no close button, backdrop handler, or Escape
//! handling beyond swallowing the key: the only way out is the pricing link.

use leptos::prelude::*;

use crate::guard::FeatureGate;

/// Billing page the upgrade buttons lead to.
pub const BILLING_PATH: &str = "/pricing";

#[derive(Clone, Copy)]
struct PlanTeaser {
    name: &'static str,
    price: &'static str,
    perks: &'static [&'static str],
}

const PLANS: &[PlanTeaser] = &[
    PlanTeaser {
        name: "Pro",
        price: "$10/mo",
        perks: &["500 songs per month", "Music videos", "Scheduled posting"],
    },
    PlanTeaser {
        name: "Premium",
        price: "$30/mo",
        perks: &["2,000 songs per month", "Motion capture", "Commercial license"],
    },
];

#[component]
pub fn FeatureLockedModal(gate: FeatureGate) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    view! {
        <div class="feature-locked__backdrop">
            <div
                class="feature-locked__modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="feature-locked-title"
                tabindex="0"
                on:keydown=on_keydown
            >
                <span class="feature-locked__badge">"Paid feature"</span>
                <h2 id="feature-locked-title">{format!("Unlock {}", gate.name)}</h2>
                {gate.description.map(|text| view! { <p class="feature-locked__description">{text}</p> })}
                <div class="feature-locked__plans">
                    {PLANS
                        .iter()
                        .map(|plan| {
                            view! {
                                <div class="feature-locked__plan">
                                    <h3>{plan.name}</h3>
                                    <p class="feature-locked__price">{plan.price}</p>
                                    <ul>
                                        {plan.perks.iter().map(|perk| view! { <li>{*perk}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <a class="btn btn--primary feature-locked__cta" href=BILLING_PATH>
                    "Upgrade now"
                </a>
            </div>
        </div>
    }
}
