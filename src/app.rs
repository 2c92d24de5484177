mod about;
mod accomplishments;
mod browser;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{content::portfolio, motion::NO_SCRIPT_FALLBACK};

use about::About;
use accomplishments::Accomplishments;
use contact::Contact;
use education::EducationSection;
use experience::ExperienceSection;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
                <noscript>
                    <style>{NO_SCRIPT_FALLBACK}</style>
                </noscript>
            </head>
            <body class="bg-[#0A0A14] text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let name = portfolio()
        .map(|p| p.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <div class="min-h-screen overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

/// The single scrolling page. Every section is independent of the others.
#[component]
fn HomePage() -> impl IntoView {
    let portfolio = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            return view! {
                <Title text="Unavailable" />
                <main class="flex min-h-screen items-center justify-center">
                    <p class="text-red-400">{format!("Couldn't load this page: {e}")}</p>
                </main>
            }
            .into_any();
        }
    };
    provide_context(portfolio.settings.clone());

    view! {
        <Title text="Portfolio" />
        <Navbar name=portfolio.profile.name.as_str() />
        <main>
            <Hero profile=&portfolio.profile />
            <About
                summary=portfolio.profile.summary.as_str()
                skills=portfolio.skills.as_slice()
            />
            <EducationSection entries=portfolio.education.as_slice() />
            <Projects portfolio=portfolio />
            <ExperienceSection entries=portfolio.experience.as_slice() />
            <Accomplishments items=portfolio.accomplishments.as_slice() />
            <Contact details=&portfolio.contact socials=portfolio.profile.socials.as_slice() />
        </main>
        <Footer profile=&portfolio.profile />
    }
    .into_any()
}
