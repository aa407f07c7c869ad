use stylist::yew::styled_component;
use yew::prelude::*;

pub mod background;
pub mod config;
pub mod content;
pub mod state;
mod styles;

pub mod components {
    pub mod about_modal;
    pub mod background;
    pub mod cards;
    pub mod icons;
}
pub mod pages {
    pub mod home;
}

use components::background::DotGridBackground;
use content::CONTENT;
use pages::home::HomePage;

#[styled_component(App)]
pub fn app() -> Html {
    html! {
        <div class={css!(r#"
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            font-family: sans-serif;
        "#)}>
            <style>{ styles::global_css() }</style>
            <DotGridBackground />
            <div class={css!(r#"
                position: relative;
                z-index: 10;
                width: 100%;
                max-width: 1920px;
                height: 100vh;
                max-height: 950px;
                padding: 1.5rem;
            "#)}>
                <HomePage content={&CONTENT} />
            </div>
        </div>
    }
}
