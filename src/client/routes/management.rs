//! The management wizard: one screen, five tabs covering the daily flow
//! from rough intake through processing to final diamonds and contacts.

use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;

use crate::client::components::wizard::{
    ContactsTab, FinalTab, OfficeTab, ProcessingTabs, StockTab,
};
use crate::client::components::Page;
use crate::client::form::wizard::{WizardTab, WIZARD_TABS};
use crate::client::store::WizardStore;

#[component]
pub fn Management() -> Element {
    let wizard = use_context_provider(WizardStore::new);

    let active = *wizard.active_tab.read();
    let body = match active {
        WizardTab::Stock => rsx!(StockTab {}),
        WizardTab::Processing => rsx!(ProcessingTabs {}),
        WizardTab::Office => rsx!(OfficeTab {}),
        WizardTab::Final => rsx!(FinalTab {}),
        WizardTab::Contacts => rsx!(ContactsTab {}),
    };

    rsx! {
        Title { "Management | Hira" }
        Meta {
            name: "description",
            content: "Record stock, processing stages, office handovers, final diamonds, and contacts."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4 p-2",
                div { role: "tablist", class: "tabs tabs-boxed flex-wrap",
                    {WIZARD_TABS.iter().map(|entry| {
                        let tab = *entry;
                        let tab_class = if tab == active {
                            "tab tab-active"
                        } else {
                            "tab"
                        };
                        let done = wizard.is_complete(tab);
                        let label = tab.label();
                        let mut active_tab = wizard.active_tab;
                        rsx!(
                            button {
                                role: "tab",
                                class: "{tab_class} gap-1",
                                onclick: move |_| active_tab.set(tab),
                                if done {
                                    Icon { width: 14, height: 14, icon: FaCheck }
                                }
                                "{label}"
                            }
                        )
                    })}
                }
                {body}
            }
        }
    }
}
