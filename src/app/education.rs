use leptos::{html, prelude::*};

use super::reveal::{motion_style, use_reveal, SectionTitle};
use crate::{
    content::Education,
    motion::{Entrance, Motion},
};

/// Alternating left/right timeline.
#[component]
pub fn EducationSection(entries: &'static [Education]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let items = entries
        .iter()
        .enumerate()
        .map(|(index, edu)| {
            let left = index % 2 == 0;
            let entrance = if left {
                Entrance::SlideFromLeft(50.0)
            } else {
                Entrance::SlideFromRight(50.0)
            };
            let motion = Motion::staggered(entrance, 200, 200, index);
            let (row, pad) = if left {
                ("md:flex-row", "md:pr-12")
            } else {
                ("md:flex-row-reverse", "md:pl-12")
            };

            view! {
                <div
                    class=format!("relative flex items-center flex-col {row}")
                    style=motion_style(motion, revealed)
                >
                    <div class=format!("w-full md:w-5/12 {pad}")>
                        <div class="group relative bg-gradient-to-br from-gray-800/50 to-gray-900/50 p-6 rounded-xl border border-gray-700 hover:border-cyan-400 transition-all duration-300 shadow-lg hover:shadow-cyan-400/20 backdrop-blur-sm">
                            <div class="flex items-center justify-between mb-4">
                                <div class=format!(
                                    "p-3 bg-gradient-to-br {} rounded-lg shadow-lg text-2xl",
                                    edu.accent.gradient(),
                                )>{edu.icon.as_str()}</div>
                                <div class="text-gray-400 text-sm">{edu.period.as_str()}</div>
                            </div>
                            <h3 class="text-xl text-gray-200 mb-2">{edu.institution.as_str()}</h3>
                            <p class="text-cyan-400 mb-1">{edu.degree.as_str()}</p>
                            <p class="text-gray-400 text-sm mb-3">{edu.field.as_str()}</p>
                            <div class="mt-4 pt-4 border-t border-gray-700">
                                <span class="text-emerald-400">{edu.achievement.as_str()}</span>
                            </div>
                        </div>
                    </div>
                    <div class="hidden md:flex absolute left-1/2 transform -translate-x-1/2 w-6 h-6 bg-gradient-to-br from-cyan-400 to-emerald-400 rounded-full border-4 border-[#0A0A14] shadow-lg shadow-cyan-400/50 z-10"></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="education" node_ref=section_ref class="py-20 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle title="Education" revealed=revealed />
                <div class="relative">
                    <div class="hidden md:block absolute left-1/2 transform -translate-x-1/2 w-1 h-full bg-gradient-to-b from-cyan-400 via-emerald-400 to-amber-400 opacity-30"></div>
                    <div class="space-y-12">{items}</div>
                </div>
            </div>
        </section>
    }
}
