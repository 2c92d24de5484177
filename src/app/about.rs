use leptos::{html, prelude::*};

use super::reveal::{motion_style, use_reveal, SectionTitle};
use crate::{
    content::SkillCategory,
    motion::{Entrance, Motion},
};

#[component]
pub fn About(summary: &'static str, skills: &'static [SkillCategory]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section id="about" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="About Me" revealed=revealed />

                <div
                    class="max-w-4xl mx-auto mb-16"
                    style=motion_style(Motion::new(Entrance::Rise(20.0)).delay_ms(200), revealed)
                >
                    <div class="bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-8 rounded-2xl border border-cyan-400/30 shadow-xl shadow-cyan-400/10 backdrop-blur-sm">
                        <p class="text-gray-300 text-lg leading-relaxed">{summary}</p>
                    </div>
                </div>

                <h3
                    class="text-3xl text-center mb-12 text-gray-200"
                    style=motion_style(Motion::new(Entrance::Rise(20.0)).delay_ms(300), revealed)
                >
                    "Skills & Expertise"
                </h3>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            let accent = skill.accent;
                            let motion = Motion::staggered(Entrance::Rise(30.0), 400, 100, index);
                            view! {
                                <div
                                    class=format!(
                                        "group relative bg-gray-800/30 p-6 rounded-xl border {} {} backdrop-blur-sm hover:scale-105 transition-all duration-300 shadow-lg {}",
                                        accent.border(),
                                        accent.bg(),
                                        accent.glow(),
                                    )
                                    style=motion_style(motion, revealed)
                                >
                                    <div class=format!(
                                        "w-16 h-16 {} rounded-lg flex items-center justify-center mb-4 border {} text-3xl group-hover:scale-110 transition-transform",
                                        accent.bg(),
                                        accent.border(),
                                    )>{skill.icon.as_str()}</div>
                                    <h4 class=format!("text-xl mb-4 {}", accent.text())>
                                        {skill.category.as_str()}
                                    </h4>
                                    <div class="flex flex-wrap gap-2">
                                        {skill
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class=format!(
                                                        "px-3 py-1 bg-gray-900/50 border {} rounded-full text-sm text-gray-300",
                                                        accent.border(),
                                                    )>{item.as_str()}</span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="absolute top-1/2 left-0 w-32 h-px bg-gradient-to-r from-transparent via-cyan-400 to-transparent opacity-30"></div>
                <div class="absolute top-1/2 right-0 w-32 h-px bg-gradient-to-r from-transparent via-emerald-400 to-transparent opacity-30"></div>
            </div>
        </section>
    }
}
