use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::PortfolioContent;
use crate::styles::dark_card;

#[derive(Properties, PartialEq)]
pub struct AboutModalProps {
    pub open: bool,
    pub content: &'static PortfolioContent,
    pub on_close: Callback<()>,
}

/// "About me" overlay. Closes on backdrop click or the X button; clicks
/// inside the body stay inside it.
#[styled_component(AboutModal)]
pub fn about_modal(props: &AboutModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_inside = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!("about-modal", "overlay-enter", css!(r#"
                position: fixed;
                inset: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 1rem;
                background: rgba(0, 0, 0, 0.1);
            "#))}
            onclick={close.clone()}
        >
            <div
                class={classes!("about-modal__body", "overlay-body-enter", dark_card(), css!(r#"
                    position: relative;
                    width: 100%;
                    max-width: 48rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    padding: 2rem;
                "#))}
                onclick={keep_inside}
            >
                <button
                    class={classes!("about-modal__close", css!(r#"
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #9CA3AF;
                        &:hover { color: white; }
                    "#))}
                    onclick={close}
                >
                    <Icon kind={IconKind::Close} />
                </button>
                <h2 class={classes!("font-cal-sans", css!("margin: 0 0 1.5rem; font-size: 2.25rem; color: white;"))}>
                    { props.content.about_title }
                </h2>
                <div class={classes!("font-montserrat-alt", css!(r#"
                    color: #D1D5DB;
                    font-size: 1.125rem;
                    & p { margin: 0 0 1rem; }
                "#))}>
                    { for props.content.about_paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                </div>
            </div>
        </div>
    }
}
