use super::*;
use serde_json::json;

// =============================================================
// InboundEvent::from_wire
// =============================================================

#[test]
fn chat_message_decodes_with_badges() {
    let event = InboundEvent::from_wire(
        EventKind::ChatMessage,
        json!({"username": "ash", "message": "hi chat", "badges": {"subscriber": "12"}}),
    )
    .expect("chat payload should decode");
    let InboundEvent::ChatMessage(payload) = event else {
        panic!("expected chat message");
    };
    assert_eq!(payload.username, "ash");
    assert_eq!(payload.message, "hi chat");
    assert_eq!(payload.badges["subscriber"], "12");
}

#[test]
fn chat_message_badges_are_optional() {
    let event = InboundEvent::from_wire(EventKind::ChatMessage, json!({"username": "ash", "message": "yo"}))
        .expect("badges should default");
    assert!(matches!(event, InboundEvent::ChatMessage(p) if p.badges.is_null()));
}

#[test]
fn chat_message_without_username_is_malformed() {
    let err = InboundEvent::from_wire(EventKind::ChatMessage, json!({"message": "orphan"})).unwrap_err();
    assert!(matches!(err, OverlayError::Payload { event: "chat_message", .. }));
}

#[test]
fn pokemon_updated_and_reset_share_payload_shape() {
    let payload = json!({"username": "misty", "pokemon": "staryu"});
    let updated = InboundEvent::from_wire(EventKind::PokemonUpdated, payload.clone()).expect("decode");
    let reset = InboundEvent::from_wire(EventKind::ResetPokemon, payload).expect("decode");
    let expected = PokemonPayload { username: "misty".to_owned(), pokemon: "staryu".to_owned() };
    assert_eq!(updated, InboundEvent::PokemonUpdated(expected.clone()));
    assert_eq!(reset, InboundEvent::ResetPokemon(expected));
}

#[test]
fn connect_ignores_payload() {
    assert_eq!(InboundEvent::from_wire(EventKind::Connect, serde_json::Value::Null), Ok(InboundEvent::Connect));
}

#[test]
fn disconnect_keeps_reason_string() {
    let event = InboundEvent::from_wire(EventKind::Disconnect, json!("transport close")).expect("decode");
    assert_eq!(event, InboundEvent::Disconnect { reason: Some("transport close".to_owned()) });
}

#[test]
fn status_requires_message() {
    let ok = InboundEvent::from_wire(EventKind::Status, json!({"message": "Connected to overlay"})).expect("decode");
    assert_eq!(ok.kind(), EventKind::Status);
    assert!(InboundEvent::from_wire(EventKind::Status, json!({})).is_err());
}

#[test]
fn outbound_kind_is_rejected_inbound() {
    let err = InboundEvent::from_wire(EventKind::PokemonUpdate, json!({"username": "a", "pokemon": "b"})).unwrap_err();
    assert!(matches!(err, OverlayError::Payload { event: "pokemon_update", .. }));
}

// =============================================================
// PokemonAssignment
// =============================================================

#[test]
fn assignment_keeps_extra_fields() {
    let raw = json!({"pokemon": "charmander", "shiny": true, "nickname": "Char"});
    let assignment: PokemonAssignment = serde_json::from_value(raw.clone()).expect("decode");
    assert_eq!(assignment.pokemon(), Some(&json!("charmander")));
    assert_eq!(serde_json::to_value(&assignment).expect("encode"), raw);
}

#[test]
fn assignment_new_serializes_bare_pokemon() {
    let value = serde_json::to_value(PokemonAssignment::new("eevee")).expect("encode");
    assert_eq!(value, json!({"pokemon": "eevee"}));
}

#[test]
fn assignment_accepts_any_json_shape() {
    for raw in [json!({"pokemon": 25}), json!({"pokemon": null}), json!({"name": "mew"}), json!("mew"), json!(null)] {
        let assignment: PokemonAssignment = serde_json::from_value(raw.clone()).expect("any JSON should decode");
        assert_eq!(assignment.as_value(), &raw);
    }
}

#[test]
fn assignment_pokemon_field_keeps_its_type() {
    assert_eq!(PokemonAssignment::from(json!({"pokemon": 25})).pokemon(), Some(&json!(25)));
    assert_eq!(PokemonAssignment::from(json!({"pokemon": null})).pokemon(), Some(&json!(null)));
    assert_eq!(PokemonAssignment::from(json!({"name": "mew"})).pokemon(), None);
    assert_eq!(PokemonAssignment::from(json!(["mew"])).pokemon(), None);
}

#[test]
fn random_pokemon_requires_pokemon_field() {
    assert!(serde_json::from_value::<RandomPokemon>(json!({"name": "mew"})).is_err());
}
