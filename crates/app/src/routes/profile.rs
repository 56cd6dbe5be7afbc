use crate::profile::use_profile_fetch;
use client::{HttpEmployeeApi, ProfileState, ProfileViewModel};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSave;
use dioxus_free_icons::Icon;
use shared_types::ProfileView;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader,
    ProfileAvatar, ReadOnlyField, Spinner,
};

/// Read-only profile of the signed-in employee.
#[component]
pub fn Profile() -> Element {
    let view_model = use_signal(ProfileViewModel::new);
    use_profile_fetch(view_model, || HttpEmployeeApi::new(client::config::api_config()));
    let state = view_model.read().state().clone();

    rsx! {
        ProfileContent { state }
    }
}

/// Renders one [`ProfileState`]; pure in its input.
#[component]
pub fn ProfileContent(state: ProfileState) -> Element {
    match state {
        ProfileState::Loading => rsx! {
            div { class: "page",
                Spinner {}
            }
        },
        ProfileState::Failed(message) => rsx! {
            div { class: "page",
                Alert { title: "Fehler!", "{message}" }
            }
        },
        ProfileState::Ready(profile) => rsx! {
            div { class: "page",
                PageHeader {
                    title: "Profil",
                    description: "Verwalten Sie Ihre persönlichen und beruflichen Informationen",
                    // Saving is not backed by any endpoint yet.
                    Button {
                        disabled: true,
                        title: "Änderungen sind derzeit nicht möglich",
                        Icon::<LdSave> { icon: LdSave, width: 16, height: 16 }
                        "Änderungen speichern"
                    }
                }
                div { class: "card-stack",
                    PersonalCard { profile: profile.clone() }
                    ProfessionalCard { profile }
                    SkillsCard {}
                }
            }
        },
    }
}

#[component]
fn PersonalCard(profile: ProfileView) -> Element {
    rsx! {
        Card { outlined: true,
            CardHeader {
                div { class: "card-header-row",
                    ProfileAvatar { initials: profile.initials.clone() }
                    div {
                        CardTitle { "Persönliche Informationen" }
                        CardDescription { "Ihre grundlegenden Informationen" }
                    }
                }
            }
            CardContent { grid: true,
                ReadOnlyField { id: "first-name", label: "Vorname", value: profile.first_name }
                ReadOnlyField { id: "last-name", label: "Nachname", value: profile.last_name }
                ReadOnlyField { id: "email", label: "Email", value: profile.email }
                ReadOnlyField { id: "manager", label: "Manager", value: profile.manager_name }
            }
        }
    }
}

#[component]
fn ProfessionalCard(profile: ProfileView) -> Element {
    rsx! {
        Card { outlined: true,
            CardHeader {
                CardTitle { "Berufliche Informationen" }
                CardDescription { "Ihre Position und Expertise" }
            }
            CardContent { grid: true,
                ReadOnlyField { id: "job-title", label: "Position", value: profile.job_title }
                ReadOnlyField { id: "department", label: "Abteilung", value: profile.department }
                ReadOnlyField { id: "employment-type", label: "Beschäftigungsart", value: profile.employment_type }
                ReadOnlyField { id: "employment-status", label: "Status", value: profile.employment_status }
                ReadOnlyField { id: "start-date", label: "Startdatum", value: profile.start_date }
            }
        }
    }
}

/// Static examples; there is no skills endpoint yet.
const SKILLS: [(&str, &str, &str); 3] = [
    (
        "technical-skills",
        "Technische Skills",
        "SAP ERP, Oracle Database, Salesforce, JIRA, Microsoft Azure",
    ),
    (
        "methods",
        "Methodenkompetenz",
        "Scrum, Kanban, Six Sigma, ITIL, Prince2",
    ),
    (
        "languages",
        "Sprachen",
        "Deutsch (Muttersprache), Englisch (C1), Französisch (B2)",
    ),
];

#[component]
fn SkillsCard() -> Element {
    rsx! {
        Card { outlined: true,
            CardHeader {
                CardTitle { "Skills & Expertise" }
                CardDescription { "Ihre Fähigkeiten und Kenntnisse" }
            }
            CardContent {
                div { class: "field-stack",
                    for (id, label, value) in SKILLS {
                        ReadOnlyField {
                            key: "{id}",
                            id: id.to_string(),
                            label: label.to_string(),
                            value: value.to_string(),
                            multiline: true,
                        }
                    }
                }
            }
        }
    }
}
