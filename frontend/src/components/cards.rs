use stylist::yew::styled_component;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::HOVER_FADE_MS;
use crate::content::{PortfolioContent, SocialLink};
use crate::state::ContactFace;
use crate::styles::{dark_card, red_card, ACCENT, TITLE_GREY};

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub content: &'static PortfolioContent,
}

/// Breaks a list of lines with `<br/>` between them.
fn lines(parts: &[&'static str]) -> Html {
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            html! {
                <>
                    if i > 0 { <br /> }
                    { *part }
                </>
            }
        })
        .collect()
}

#[styled_component(HeaderCard)]
pub fn header_card(props: &ContentProps) -> Html {
    html! {
        <header class={classes!("site-header", dark_card(), css!(r#"
            flex: 2 1 0%;
            display: flex;
            align-items: center;
            justify-content: center;
        "#))}>
            <h1 class={classes!("font-cal-sans", css!(r#"
                margin: 0;
                font-size: 2.25rem;
                color: ${grey};
                @media (min-width: 768px) { font-size: 3rem; }
            "#, grey = TITLE_GREY))}>
                { props.content.owner_name }
            </h1>
        </header>
    }
}

#[styled_component(HeroCard)]
pub fn hero_card(props: &ContentProps) -> Html {
    let content = props.content;
    html! {
        <div class={classes!("hero-card", dark_card(), css!(r#"
            padding: 2rem;
            display: flex;
            flex-direction: column;
            justify-content: flex-end;
            @media (min-width: 768px) { grid-column: span 3 / span 3; }
        "#))}>
            <h2 class={classes!("font-cal-sans", css!(r#"
                margin: 0;
                font-size: 2.25rem;
                line-height: 1.25;
                color: ${grey};
                @media (min-width: 768px) { font-size: 3rem; }
            "#, grey = TITLE_GREY))}>
                { content.hero_lead }
                <br />
                <span class={classes!("font-montserrat-alt", css!(r#"
                    font-weight: 200;
                    font-style: italic;
                    font-size: 4.5rem;
                    color: ${accent};
                    @media (min-width: 768px) { font-size: 6rem; }
                "#, accent = ACCENT))}>
                    { content.hero_accent }
                </span>
                <br />
                { lines(content.hero_tail) }
            </h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageCardProps {
    pub content: &'static PortfolioContent,
    pub on_open: Callback<()>,
}

/// Portrait that opens the about overlay.
#[styled_component(ImageCard)]
pub fn image_card(props: &ImageCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div {onclick} class={classes!("image-card", dark_card(), css!(r#"
            position: relative;
            overflow: hidden;
            cursor: pointer;
            min-height: 200px;
            @media (min-width: 768px) { grid-column: span 2 / span 2; }

            & img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                transition: transform 300ms ease-in-out;
            }
            &:hover img {
                transform: scale(1.1);
            }
            & .image-card__caption {
                position: absolute;
                inset: 0;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.6);
                opacity: 0;
                transition: opacity 300ms;
            }
            &:hover .image-card__caption {
                opacity: 1;
            }
        "#))}>
            <img src={props.content.portrait_url} alt={props.content.portrait_alt} />
            <div class="image-card__caption">
                <p class={classes!("font-montserrat-alt", css!("color: white; font-size: 1.875rem;"))}>
                    { props.content.about_title }
                </p>
            </div>
        </div>
    }
}

#[styled_component(WorkCard)]
pub fn work_card(props: &ContentProps) -> Html {
    html! {
        <div class={classes!("work-card", "hover-group", dark_card(), css!(r#"
            padding: 2rem;
            display: flex;
            flex-direction: column;
            justify-content: flex-end;
            cursor: pointer;
            @media (min-width: 768px) { grid-column: span 2 / span 2; }
        "#))}>
            <div class={css!("display: flex; justify-content: space-between; align-items: flex-end; width: 100%;")}>
                <h2 class={classes!("font-montserrat-alt", css!(r#"
                    margin: 0;
                    color: white;
                    font-size: 2.25rem;
                    line-height: 1.25;
                    @media (min-width: 768px) { font-size: 3rem; }
                "#))}>
                    { lines(props.content.work_label) }
                </h2>
                <Icon kind={IconKind::ArrowUpRight} size={48} class={classes!("rotate-on-hover", css!("color: white;"))} />
            </div>
        </div>
    }
}

/// Red card that reveals the email address while hovered.
#[styled_component(ContactCard)]
pub fn contact_card(props: &ContentProps) -> Html {
    let hovered = use_state(|| false);
    let content = props.content;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let face = ContactFace::for_hover(*hovered);
    let face_style = |which: ContactFace| {
        format!(
            "opacity: {}; transition: opacity {}ms ease-in-out;",
            face.opacity_of(which),
            HOVER_FADE_MS
        )
    };

    let layer = css!(r#"
        position: absolute;
        inset: 0;
        padding: 2rem;
        display: flex;
        flex-direction: column;
    "#);
    let big_text = classes!("font-montserrat-alt", css!(r#"
        margin: 0;
        color: white;
        font-size: 3rem;
        line-height: 1.25;
        @media (min-width: 768px) { font-size: 3.75rem; }
    "#));

    html! {
        <div
            {onmouseenter}
            {onmouseleave}
            class={classes!("contact-card", "hover-group", red_card(), css!(r#"
                position: relative;
                overflow: hidden;
                min-height: 250px;
                @media (min-width: 768px) { grid-column: span 3 / span 3; }
            "#))}
        >
            <div
                class={classes!("contact-card__cta", layer.clone(), css!("justify-content: space-between;"))}
                style={face_style(ContactFace::CallToAction)}
            >
                <div class={css!("display: flex; justify-content: space-between; align-items: center;")}>
                    <p class={classes!("font-montserrat-alt", css!("margin: 0; color: white;"))}>
                        { content.contact_prompt }
                    </p>
                    <Icon kind={IconKind::ArrowUpRight} size={32} class={classes!("rotate-on-hover", css!("color: white;"))} />
                </div>
                <h2 class={big_text.clone()}>{ lines(content.contact_headline) }</h2>
            </div>
            <div
                class={classes!("contact-card__email", layer, css!("justify-content: flex-end;"))}
                style={face_style(ContactFace::Email)}
            >
                <h3 class={big_text}>{ "email:" }</h3>
                <p class={classes!("font-montserrat-alt", css!("margin: 0.5rem 0 0; color: white; font-size: 1.25rem;"))}>
                    { content.contact_email }
                </p>
            </div>
        </div>
    }
}

#[styled_component(FillerPanel)]
pub fn filler_panel() -> Html {
    html! {
        <div class={classes!("filler-panel", dark_card(), css!("grid-row: span 5 / span 5;"))}></div>
    }
}

#[styled_component(SocialRow)]
pub fn social_row(props: &ContentProps) -> Html {
    let link = |social: &SocialLink| {
        html! {
            <a
                href={social.href}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={social.label}
                class={css!(r#"
                    color: #9CA3AF;
                    transition: color 300ms;
                    &:hover { color: ${accent}; }
                "#, accent = ACCENT)}
            >
                <Icon kind={social.icon} size={28} />
            </a>
        }
    };

    html! {
        <div class={classes!("social-row", dark_card(), css!(r#"
            grid-row: span 1 / span 1;
            display: flex;
            align-items: center;
            justify-content: space-evenly;
        "#))}>
            { for props.content.socials.iter().map(link) }
        </div>
    }
}
