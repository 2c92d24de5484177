use leptos::{html, prelude::*};

use super::{
    browser::BodyScroll,
    reveal::{motion_style, use_reveal, SectionTitle},
};
use crate::{
    content::{Portfolio, Project},
    motion::{Entrance, Motion},
    scroll_lock::{ensure_held, ScrollLockGuard},
};

const CARD_TECHNOLOGIES: usize = 3;

#[component]
pub fn Projects(portfolio: &'static Portfolio) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let selected = RwSignal::new(None::<u32>);
    // Held for exactly as long as the overlay is open.
    let scroll_lock = StoredValue::new_local(None::<ScrollLockGuard<BodyScroll>>);

    let open = move |id: u32| {
        scroll_lock.update_value(|guard| ensure_held(guard, BodyScroll));
        selected.set(Some(id));
    };
    let close = Callback::new(move |()| {
        selected.set(None);
        scroll_lock.set_value(None);
    });
    on_cleanup(move || {
        scroll_lock.try_update_value(|guard| guard.take());
    });

    let detail = move || {
        selected
            .get()
            .and_then(|id| portfolio.project(id))
            .map(|project| view! { <ProjectDetail project=project on_close=close /> })
    };

    view! {
        <section id="projects" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Featured Projects" revealed=revealed />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {portfolio
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let motion = Motion::staggered(Entrance::Rise(30.0), 200, 100, index);
                            view! {
                                <div style=motion_style(motion, revealed)>
                                    <ProjectCard project=project on_open=move || open(project.id) />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {detail}
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: impl Fn() + 'static) -> impl IntoView {
    let accent = project.accent;
    let (shown, more) = project.preview_technologies(CARD_TECHNOLOGIES);

    view! {
        <div
            class=format!(
                "group bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-6 rounded-xl border {} backdrop-blur-sm hover:scale-105 transition-all duration-300 shadow-lg {} hover:shadow-xl cursor-pointer relative overflow-hidden h-full",
                accent.border(),
                accent.glow(),
            )
            on:click=move |_| on_open()
        >
            <div class=format!(
                "w-16 h-16 bg-gradient-to-br {} rounded-lg flex items-center justify-center mb-4 shadow-lg relative z-10 text-3xl",
                accent.gradient(),
            )>{project.icon.as_str()}</div>
            <p class="text-gray-400 text-sm mb-2 relative z-10">{project.period.as_str()}</p>
            <h3 class=format!("text-xl mb-3 {} relative z-10", accent.text())>
                {project.title.as_str()}
            </h3>
            <p class="text-gray-300 mb-4 relative z-10">{project.short_description.as_str()}</p>

            <div class="flex flex-wrap gap-2 mb-4 relative z-10">
                {shown
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class=format!(
                                "px-2 py-1 {} border {} rounded text-xs text-gray-300",
                                accent.bg(),
                                accent.border(),
                            )>{tech.as_str()}</span>
                        }
                    })
                    .collect_view()}
                {(more > 0)
                    .then(|| {
                        view! {
                            <span class="px-2 py-1 bg-gray-700/50 rounded text-xs text-gray-400">
                                {format!("+{more} more")}
                            </span>
                        }
                    })}
            </div>

            <div class=format!("flex items-center gap-2 {} text-sm mb-4 relative z-10", accent.text())>
                <span>"↗"</span>
                <span>{project.achievement.as_str()}</span>
            </div>

            <div class="flex gap-3 relative z-10">
                <button class=format!(
                    "flex-1 px-4 py-2 {} border {} rounded-lg {} transition-all",
                    accent.bg(),
                    accent.border(),
                    accent.text(),
                )>"View Details"</button>
                {project
                    .link
                    .as_deref()
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="Open project"
                                on:click=|ev| ev.stop_propagation()
                                class=format!(
                                    "px-4 py-2 bg-gradient-to-r {} text-white rounded-lg hover:shadow-lg transition-all flex items-center",
                                    accent.gradient(),
                                )
                            >
                                "⧉"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

/// Full-screen overlay. Clicking the backdrop or the close button dismisses
/// it; clicks inside the panel don't.
#[component]
fn ProjectDetail(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let accent = project.accent;

    view! {
        <div
            class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-4"
            on:click=move |_| on_close.run(())
        >
            <div
                class="relative bg-gradient-to-br from-gray-800 to-gray-900 rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto border border-cyan-400 shadow-2xl shadow-cyan-400/20"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <button
                    on:click=move |_| on_close.run(())
                    aria-label="Close"
                    class="absolute top-4 right-4 w-10 h-10 bg-gray-700 hover:bg-gray-600 rounded-full transition-colors"
                >
                    "✕"
                </button>

                <div class="p-8">
                    <div class=format!(
                        "w-20 h-20 bg-gradient-to-br {} rounded-xl flex items-center justify-center mb-6 shadow-lg text-4xl",
                        accent.gradient(),
                    )>{project.icon.as_str()}</div>
                    <h3 class="text-3xl mb-2 bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent">
                        {project.title.as_str()}
                    </h3>
                    <p class="text-gray-400 mb-6">{project.period.as_str()}</p>
                    <p class="text-gray-300 mb-6 leading-relaxed">
                        {project.full_description.as_str()}
                    </p>

                    <div class="mb-6">
                        <h4 class="text-lg text-cyan-400 mb-3">"Technologies Used"</h4>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <span class=format!(
                                            "px-3 py-1 {} border {} rounded-full text-sm",
                                            accent.bg(),
                                            accent.border(),
                                        )>{tech.as_str()}</span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="mb-6 p-4 bg-emerald-400/10 border border-emerald-400 rounded-lg">
                        <span class="text-lg text-emerald-400">{project.achievement.as_str()}</span>
                    </div>

                    {project
                        .link
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="w-full px-6 py-3 bg-gradient-to-r from-cyan-500 to-emerald-500 rounded-lg hover:from-cyan-400 hover:to-emerald-400 transition-all duration-300 flex items-center justify-center gap-2 shadow-lg shadow-cyan-500/30"
                                >
                                    "Visit Project"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
