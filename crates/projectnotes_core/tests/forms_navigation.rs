use projectnotes_core::{
    parse_route, FormMode, NoteForm, NoteStore, NoteStoreError, ScreenRequest,
};

#[test]
fn add_form_submits_and_clears_draft() {
    let mut store = NoteStore::default();
    let mut form = NoteForm::add();
    form.set_header("Groceries");
    assert!(form.set_description("milk, eggs and bread"));

    let note = form.submit(&mut store).unwrap();
    assert_eq!(store.get(note.id).unwrap().header, "Groceries");
    assert_eq!(form.header(), "");
    assert_eq!(form.description(), "");
    assert_eq!(form.error(), None);
    assert_eq!(form.completion_target(), ScreenRequest::NotesList);
}

#[test]
fn rejected_submit_records_message_and_keeps_draft() {
    let mut store = NoteStore::default();
    let mut form = NoteForm::add();
    form.set_header("ab");
    form.set_description("1234567890");

    assert!(form.submit(&mut store).is_err());
    assert_eq!(form.error(), Some("Header must be at least 3 characters"));
    assert_eq!(form.header(), "ab");
    assert!(store.is_empty());

    form.set_header("abc");
    form.submit(&mut store).unwrap();
    assert_eq!(form.error(), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn edit_form_updates_in_place_and_keeps_draft() {
    let mut store = NoteStore::default();
    let note = store.add("Note1", "do something").unwrap();

    let mut form = NoteForm::edit(&store, note.id).unwrap();
    form.set_header("NoteX");
    let updated = form.submit(&mut store).unwrap();

    assert_eq!(updated.id, note.id);
    assert_eq!(form.mode(), FormMode::Edit(note.id));
    assert_eq!(form.header(), "NoteX");
    assert_eq!(store.get(note.id).unwrap().header, "NoteX");
}

#[test]
fn edit_form_for_missing_note_is_not_found() {
    let store = NoteStore::default();
    assert_eq!(
        NoteForm::edit(&store, 5).unwrap_err(),
        NoteStoreError::NotFound(5)
    );
}

#[test]
fn edit_submit_after_note_removed_reports_not_found() {
    let mut store = NoteStore::default();
    let note = store.add("Note1", "do something").unwrap();
    let mut form = NoteForm::edit(&store, note.id).unwrap();
    store.remove(note.id).unwrap();

    let err = form.submit(&mut store).unwrap_err();
    assert_eq!(err, NoteStoreError::NotFound(note.id));
    assert_eq!(form.error(), Some("note not found: 1"));
}

#[test]
fn detail_route_for_removed_note_resolves_to_list() {
    let mut store = NoteStore::default();
    let note = store.add("Note1", "do something").unwrap();
    let detail = parse_route(&format!("detailedViewListItem/{}", note.id)).unwrap();
    assert_eq!(detail, ScreenRequest::NoteDetail(note.id));
    assert_eq!(detail.resolve(&store), detail);

    store.remove(note.id).unwrap();
    assert_eq!(detail.resolve(&store), ScreenRequest::NotesList);
    assert_eq!(
        ScreenRequest::EditNote(note.id).resolve(&store),
        ScreenRequest::NotesList
    );
    assert_eq!(
        ScreenRequest::AddNote.resolve(&store),
        ScreenRequest::AddNote
    );
}

#[test]
fn routes_use_screen_names() {
    assert_eq!(ScreenRequest::default().route(), "notesList");
    assert_eq!(ScreenRequest::AddNote.route(), "addListItem");
    assert_eq!(ScreenRequest::NoteDetail(2).route(), "detailedViewListItem/2");
    assert_eq!(ScreenRequest::EditNote(2).route(), "editListItem/2");
}
