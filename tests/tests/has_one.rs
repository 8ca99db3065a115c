use knit::{
    stmt::{Fields, Filter, Join, Op, Value},
    Model, Relation,
};
use pretty_assertions::assert_eq;
use tests::*;

#[test]
fn get_related_row() {
    let db = setup();
    let alice: User = find(&db, 1);

    let profile = alice.profile(&db).get().unwrap().unwrap();
    assert_eq!(profile.bio, "rustacean");
    assert_eq!(profile.user_id, alice.id);
}

#[test]
fn get_missing_related_row() {
    let db = setup();
    let carol: User = find(&db, 3);

    assert_eq!(carol.profile(&db).get().unwrap(), None);
}

#[test]
fn base_query_scopes_to_parent() {
    let db = setup();
    let bob: User = find(&db, 2);

    let mut profile = bob.profile(&db);
    assert_eq!(profile.count().unwrap(), 1);

    let filters = &profile.base().query().unwrap().options().filters;
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].field, "user_id");
    assert_eq!(filters[0].op, Op::Eq);
    assert_eq!(filters[0].value, Value::I64(2));
}

#[test]
fn has_where_joins_the_target() {
    let db = setup();
    let alice: User = find(&db, 1);

    let query = alice
        .profile(&db)
        .has_where(vec![Filter::keyed("bio", "gopher")], None)
        .unwrap();

    let options = query.options();
    assert_eq!(options.table, "users");
    assert_eq!(options.alias.as_deref(), Some("User"));
    assert_eq!(
        options.fields,
        Some(Fields::Raw("User.*".to_string()))
    );
    assert_eq!(
        options.joins,
        vec![Join::inner("profiles", Some("Profile"), "User.id", "Profile.user_id")]
    );
    assert_eq!(options.filters[0].field, "Profile.bio");

    let users = User::to_collection(query.select().unwrap()).unwrap();
    assert_ids!(users, [2]);
}

#[test]
fn has_where_with_fields() {
    let db = setup();
    let alice: User = find(&db, 1);

    let query = alice
        .profile(&db)
        .has_where(
            vec![Filter::condition("bio", Op::Like, "%ust%")],
            Some("id, name".into()),
        )
        .unwrap();

    let rows = query.select().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["id", "name"]);

    let users = User::to_collection(rows).unwrap();
    assert_eq!(users[0].name, "alice");
}
