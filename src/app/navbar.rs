use leptos::prelude::*;

use super::browser::scroll_to_section;

const LINKS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("accomplishments", "Achievements"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar(name: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    let jump = move |id: &'static str| {
        set_open.set(false);
        scroll_to_section(id);
    };

    let links = move || {
        LINKS
            .iter()
            .map(|&(id, label)| {
                view! {
                    <button
                        on:click=move |_| jump(id)
                        class="px-3 py-2 text-gray-300 hover:text-cyan-400 transition-colors duration-300"
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-[#0A0A14]/80 backdrop-blur-md border-b border-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-20 flex items-center justify-between">
                <button
                    on:click=move |_| jump("home")
                    class="text-xl bg-gradient-to-r from-cyan-400 to-emerald-400 bg-clip-text text-transparent"
                >
                    {name}
                </button>
                <div class="hidden md:flex gap-2">{links}</div>
                <button
                    class="md:hidden text-gray-300 hover:text-cyan-400 text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || open.get()>
                <div class="md:hidden flex flex-col px-4 pb-4 bg-[#0A0A14]/95">{links}</div>
            </Show>
        </nav>
    }
}
