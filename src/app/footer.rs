use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::Profile;

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="py-8 border-t border-gray-800 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <p class="text-gray-400 flex items-center justify-center gap-2 flex-wrap">
                        <span>{format!("© {year} {}. All rights reserved.", profile.name)}</span>
                        <span class="hidden sm:inline">"•"</span>
                        <span class="flex items-center gap-1">
                            "Built with " <span class="text-red-500 animate-pulse">"♥"</span>
                            " and curiosity"
                        </span>
                    </p>
                    <p class="text-gray-500 text-sm mt-2">{profile.footer_note.as_str()}</p>
                    <p class="text-gray-600 text-xs mt-1">
                        "Last updated " {env!("BUILD_TIME")}
                    </p>
                </div>
            </div>

            <div class="absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r from-transparent via-cyan-400 to-transparent opacity-30"></div>
        </footer>
    }
}
