use super::common::*;
use crate::contract::{FormEvent, RecordError};

fn remove(id: &str) -> FormEvent {
    FormEvent::RemoveRoyaltyOption { id: id.to_string() }
}

#[test]
fn removing_selected_option_selects_first_remaining() {
    let session = apply_all(blank_session(), vec![remove("990")]);
    assert_eq!(royalty_ids(&session), ["1490", "isencao"]);
    assert_eq!(session.record().selected_royalty_id, "1490");
}

#[test]
fn removing_unselected_option_keeps_selection() {
    let session = apply_all(blank_session(), vec![remove("isencao")]);
    assert_eq!(session.record().selected_royalty_id, "990");
}

#[test]
fn removing_last_option_clears_selection() {
    let session = apply_all(
        blank_session(),
        vec![remove("1490"), remove("990"), remove("isencao")],
    );
    assert!(session.record().royalty_options.is_empty());
    assert!(session.record().selected_royalty_id.is_empty());
    assert!(session.record().selected_royalty().is_none());
}

#[test]
fn added_option_uses_placeholder_text_and_becomes_selected() {
    let session = apply_all(blank_session(), vec![FormEvent::AddRoyaltyOption]);
    let added = session
        .record()
        .royalty_options
        .last()
        .expect("option added");
    assert_eq!(added.title, "Nova Opção de Royalties");
    assert_eq!(added.description, "Descrição da nova opção.");
    assert_eq!(session.record().selected_royalty_id, added.id);
    assert_eq!(session.record().check_integrity(), Ok(()));
}

#[test]
fn edit_and_select_address_existing_options() {
    let session = apply_all(
        blank_session(),
        vec![
            FormEvent::EditRoyaltyOption {
                id: "1490".to_string(),
                title: "Opção 2: R$ 1.590,00 ao mês.".to_string(),
                description: "Reajustada.".to_string(),
            },
            FormEvent::SelectRoyaltyOption {
                id: "1490".to_string(),
            },
        ],
    );
    let selected = session.record().selected_royalty().expect("selection");
    assert_eq!(selected.title, "Opção 2: R$ 1.590,00 ao mês.");
    assert_eq!(selected.description, "Reajustada.");
}

#[test]
fn unknown_option_ids_are_rejected() {
    let session = blank_session();
    for event in [
        remove("missing"),
        FormEvent::SelectRoyaltyOption {
            id: "missing".to_string(),
        },
    ] {
        assert_eq!(
            session.apply(event),
            Err(RecordError::UnknownRoyaltyOption("missing".to_string()))
        );
    }
}
