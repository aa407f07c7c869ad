use log::warn;
use stylist::yew::styled_component;
use web_sys::Element;
use yew::prelude::*;

use crate::background::{Animator, AnimatorError, BackgroundConfig};

#[derive(Properties, PartialEq)]
pub struct DotGridProps {
    #[prop_or_default]
    pub config: BackgroundConfig,
}

/// Fixed full-viewport layer behind the page. Renders an empty container if
/// the animator can't start.
#[styled_component(DotGridBackground)]
pub fn dot_grid_background(props: &DotGridProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let config = props.config.clone();
        use_effect_with_deps(
            move |_| {
                let mounted = container_ref
                    .cast::<Element>()
                    .ok_or(AnimatorError::MissingContainer)
                    .and_then(|container| Animator::mount(&container, config));

                let animator = match mounted {
                    Ok(animator) => Some(animator),
                    Err(err) => {
                        warn!("Background disabled: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(mut animator) = animator {
                        animator.stop();
                    }
                }
            },
            (), // mount once, tear down on unmount
        );
    }

    html! {
        <div
            ref={container_ref}
            class={classes!("dot-grid", css!(r#"
                position: fixed;
                top: 0;
                left: 0;
                width: 100vw;
                height: 100vh;
                z-index: -1;
                pointer-events: none;

                & canvas {
                    display: block;
                }
            "#))}
        />
    }
}
