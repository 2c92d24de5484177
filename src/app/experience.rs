use leptos::{html, prelude::*};

use super::reveal::{motion_style, use_reveal, SectionTitle};
use crate::{
    content::Experience,
    motion::{Entrance, Motion},
};

#[component]
pub fn ExperienceSection(entries: &'static [Experience]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id="experience" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Experience" revealed=revealed />
                <div class="space-y-8">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, job)| {
                            let motion = Motion::staggered(Entrance::Rise(30.0), 200, 200, index);
                            view! {
                                <div class="max-w-4xl mx-auto" style=motion_style(motion, revealed)>
                                    <ExperienceCard job=job />
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
fn ExperienceCard(job: &'static Experience) -> impl IntoView {
    let bullets = job
        .responsibilities
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let dot = if i % 2 == 0 { "bg-cyan-400" } else { "bg-emerald-400" };
            view! {
                <div class="flex items-start gap-3">
                    <div class=format!("w-2 h-2 {dot} rounded-full mt-2 flex-shrink-0")></div>
                    <p class="text-gray-300">{line.as_str()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="group bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-8 rounded-2xl border border-cyan-400 backdrop-blur-sm hover:shadow-2xl hover:shadow-cyan-400/20 transition-all duration-300 relative overflow-hidden">
            <div class="flex items-start gap-4 mb-6 relative z-10">
                <div class="w-16 h-16 bg-gradient-to-br from-cyan-400 to-emerald-400 rounded-xl flex items-center justify-center shadow-lg flex-shrink-0 text-3xl">
                    "💼"
                </div>
                <div>
                    <h3 class="text-2xl text-gray-200 mb-2">{job.role.as_str()}</h3>
                    <p class="text-cyan-400 text-lg mb-2">{job.company.as_str()}</p>
                    <div class="flex flex-wrap gap-4 text-gray-400 text-sm">
                        <span>{job.location.as_str()}</span>
                        <span>{job.period.as_str()}</span>
                    </div>
                </div>
            </div>

            <div class="relative z-10">
                <p class="text-gray-300 leading-relaxed mb-6">{job.summary.as_str()}</p>
                <div class="space-y-3">{bullets}</div>
                <div class="mt-6 pt-6 border-t border-gray-700">
                    <h4 class="text-emerald-400 mb-3">"Skills Gained"</h4>
                    <div class="flex flex-wrap gap-2">
                        {job
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <span class="px-3 py-1 bg-cyan-400/10 border border-cyan-400 rounded-full text-sm text-gray-300">
                                        {skill.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute top-0 right-0 w-32 h-32 border-r-2 border-t-2 border-cyan-400/20 rounded-tr-2xl"></div>
            <div class="absolute bottom-0 left-0 w-32 h-32 border-l-2 border-b-2 border-emerald-400/20 rounded-bl-2xl"></div>
        </div>
    }
}
