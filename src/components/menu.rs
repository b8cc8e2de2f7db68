//! Header navigation with the dropdown menu.

use leptos::prelude::*;

use crate::state::menu::MenuState;

/// Dropdown entry.
struct NavLink {
    href: &'static str,
    label: &'static str,
}

/// In-page navigation targets, in dropdown order.
const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#strengths", label: "Strengths" },
    NavLink { href: "#goals", label: "Goals" },
];

/// Menu trigger + dropdown.
///
/// `aria-expanded` mirrors [`MenuState::open`]; the dropdown carries the
/// `hidden` attribute while closed. A document-level listener closes the
/// menu on any click outside the `.menu` container; selecting a link closes
/// it as well.
#[component]
pub fn NavMenu() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            attach_outside_close(menu);
        });
    }

    view! {
        <div class="menu">
            <button
                class="menu-toggle"
                id="menu-toggle"
                aria-haspopup="true"
                aria-expanded=move || menu.get().aria_expanded()
                on:click=move |_| menu.update(MenuState::toggle)
            >
                "Menu"
            </button>
            <ul class="menu-dropdown" id="menu-dropdown" hidden=move || !menu.get().open>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href on:click=move |_| menu.update(MenuState::close)>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(feature = "csr")]
fn attach_outside_close(menu: RwSignal<MenuState>) {
    use wasm_bindgen::{JsCast, closure::Closure};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if !menu.get_untracked().open {
            return;
        }
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".menu").ok().flatten())
            .is_some();
        if !inside {
            menu.update(MenuState::close);
        }
    });
    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}
