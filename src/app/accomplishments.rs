use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

use super::reveal::{motion_style, use_reveal, SectionTitle};
use crate::{
    config::SiteSettings,
    content::{Accomplishment, Metric},
    motion::{CountUp, Entrance, Motion},
};

#[component]
pub fn Accomplishments(items: &'static [Accomplishment]) -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    // Animated metrics count up once the section is on screen, then stop.
    let counter = RwSignal::new(CountUp::new(settings.counter_target, settings.counter_step));
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            counter.maybe_update(CountUp::tick);
        },
        settings.counter_interval_ms,
        UseIntervalFnOptions::default().immediate(false),
    );
    Effect::new(move |_| {
        if revealed.get() {
            resume();
        }
    });
    Effect::new(move |_| {
        if counter.with(CountUp::is_done) {
            pause();
        }
    });

    view! {
        <section id="accomplishments" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Accomplishments" revealed=revealed />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let motion = Motion::staggered(Entrance::Rise(30.0), 200, 100, index);
                            let accent = item.accent;
                            view! {
                                <div
                                    class=format!(
                                        "group bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-6 rounded-xl border {} backdrop-blur-sm hover:scale-105 transition-all duration-300 shadow-lg {} hover:shadow-xl relative overflow-hidden",
                                        accent.border(),
                                        accent.glow(),
                                    )
                                    style=motion_style(motion, revealed)
                                >
                                    <div class="relative z-10">
                                        <div class="flex items-start justify-between mb-4">
                                            <div class=format!(
                                                "w-14 h-14 bg-gradient-to-br {} rounded-lg flex items-center justify-center shadow-lg text-2xl",
                                                accent.gradient(),
                                            )>{item.icon.as_str()}</div>
                                            {item
                                                .metric
                                                .as_ref()
                                                .map(|metric| {
                                                    view! { <MetricBadge item=item metric=metric counter=counter /> }
                                                })}
                                        </div>
                                        <h3 class=format!("text-xl mb-2 {}", accent.text())>
                                            {item.title.as_str()}
                                        </h3>
                                        <p class="text-gray-400 text-sm mb-3">
                                            {item.organization.as_str()}
                                        </p>
                                        <p class="text-gray-300 text-sm">{item.description.as_str()}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricBadge(
    item: &'static Accomplishment,
    metric: &'static Metric,
    counter: RwSignal<CountUp>,
) -> impl IntoView {
    let accent = item.accent;
    let value = move || {
        if metric.animated {
            format!("{}+", counter.with(CountUp::value))
        } else {
            metric.value.clone()
        }
    };

    view! {
        <div class=format!(
            "text-right {} px-4 py-2 rounded-lg border {}",
            accent.bg(),
            accent.border(),
        )>
            <div class=format!("text-2xl {}", accent.text())>{value}</div>
            <div class="text-xs text-gray-400">{metric.label.as_str()}</div>
        </div>
    }
}
