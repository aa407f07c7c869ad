use stylist::yew::styled_component;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::about_modal::AboutModal;
use crate::components::cards::{
    ContactCard, FillerPanel, HeaderCard, HeroCard, ImageCard, SocialRow, WorkCard,
};
use crate::content::PortfolioContent;
use crate::state::{PageAction, PageState};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub content: &'static PortfolioContent,
}

#[styled_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let content = props.content;
    let page = use_reducer(PageState::default);

    let open_about = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::OpenAbout))
    };
    let close_about = {
        let page = page.clone();
        Callback::from(move |_: ()| page.dispatch(PageAction::CloseAbout))
    };

    // Escape closes the overlay while it is open
    {
        let about_open = page.about_open;
        let page = page.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open {
                    web_sys::window().and_then(|window| {
                        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                page.dispatch(PageAction::CloseAbout);
                            }
                        }) as Box<dyn FnMut(KeyboardEvent)>);
                        window
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                            .ok()
                            .map(|_| (window, callback))
                    })
                } else {
                    None
                };

                move || {
                    if let Some((window, callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            about_open,
        );
    }

    let gap = css!(r#"
        gap: 1rem;
        @media (min-width: 768px) { gap: 1.5rem; }
    "#);

    html! {
        <>
            <div class={classes!("home", gap.clone(), css!(r#"
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
            "#))}>
                <HeaderCard {content} />
                <main class={classes!(gap.clone(), css!(r#"
                    flex: 15 1 0%;
                    min-height: 0;
                    display: grid;
                    grid-template-columns: repeat(1, minmax(0, 1fr));
                    @media (min-width: 1024px) {
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                    }
                "#))}>
                    <div class={classes!(gap.clone(), css!(r#"
                        display: grid;
                        grid-template-columns: repeat(1, minmax(0, 1fr));
                        @media (min-width: 768px) {
                            grid-template-columns: repeat(5, minmax(0, 1fr));
                        }
                        @media (min-width: 1024px) {
                            grid-column: span 2 / span 2;
                        }
                    "#))}>
                        <HeroCard {content} />
                        <ImageCard {content} on_open={open_about} />
                        <WorkCard {content} />
                        <ContactCard {content} />
                    </div>
                    <div class={classes!(gap, css!(r#"
                        display: grid;
                        grid-template-rows: repeat(6, minmax(0, 1fr));
                    "#))}>
                        <FillerPanel />
                        <SocialRow {content} />
                    </div>
                </main>
            </div>
            <AboutModal open={page.about_open} {content} on_close={close_about} />
        </>
    }
}
