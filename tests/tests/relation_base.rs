use knit::{
    stmt::{Filter, Op, Record, Selection},
    HasMany, Model, Query, Relation, RelationBase,
};
use pretty_assertions::assert_eq;
use tests::*;

/// A relation without a target query.
struct Detached<'a> {
    base: RelationBase<'a, User, Todo>,
}

impl<'a> Detached<'a> {
    fn new(parent: &'a User) -> Self {
        Detached {
            base: RelationBase::new("Detached", parent, None, "user_id", "id"),
        }
    }
}

impl<'a> Relation<'a> for Detached<'a> {
    type Parent = User;
    type Target = Todo;

    fn base(&self) -> &RelationBase<'a, User, Todo> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RelationBase<'a, User, Todo> {
        &mut self.base
    }
}

#[test]
fn parent_is_the_declaring_model() {
    let db = setup();
    let alice: User = find(&db, 1);

    let todos = alice.todos(&db);
    assert!(std::ptr::eq(todos.parent(), &alice));
    assert_eq!(todos.parent().name, "alice");
}

#[test]
fn model_describes_the_target() {
    let db = setup();
    let alice: User = find(&db, 1);

    let todos = alice.todos(&db);
    assert_eq!(*todos.model().unwrap(), Todo::info());
    assert_eq!(todos.model().unwrap().table, "todos");
}

#[test]
fn model_without_query_fails() {
    let db = setup();
    let alice: User = find(&db, 1);

    let err = assert_err!(Detached::new(&alice).model());
    assert!(err.is_invalid_model());
}

#[test]
fn model_on_query_without_model_fails() {
    let db = setup();
    let alice: User = find(&db, 1);

    let relation: Detached<'_> = Detached {
        base: RelationBase::new(
            "Detached",
            &alice,
            Some(Query::new(&db, "todos")),
            "user_id",
            "id",
        ),
    };

    let err = assert_err!(relation.model());
    assert!(err.is_invalid_model());
    assert_eq!(
        err.to_string(),
        "invalid model: query on `todos` has no model"
    );
}

#[test]
fn self_relation_flag() {
    let db = setup();
    let alice: User = find(&db, 1);

    let mut todos = alice.todos(&db);
    assert!(!todos.is_self_relation());

    todos.mark_self_relation();
    assert!(todos.is_self_relation());

    todos.self_relation(false);
    assert!(!todos.is_self_relation());

    // Marking twice is the same as marking once.
    todos.mark_self_relation().mark_self_relation();
    assert!(todos.is_self_relation());
}

#[test]
fn query_fields_defaults_to_wildcard() {
    let db = setup();
    let alice: User = find(&db, 1);

    let todos = alice.todos(&db);
    assert_eq!(
        todos.query_fields("Todo").unwrap(),
        Selection::All("Todo.*".to_string())
    );
}

#[test]
fn query_fields_qualifies_configured_fields() {
    let db = setup();
    let alice: User = find(&db, 1);

    let mut todos = alice.todos(&db);
    todos.field("id, title, u.name").unwrap();

    assert_eq!(
        todos.query_fields("Todo").unwrap(),
        Selection::List(vec![
            "Todo.id".to_string(),
            "Todo.title".to_string(),
            "u.name".to_string(),
        ])
    );
}

#[test]
fn query_fields_without_query_fails() {
    let db = setup();
    let alice: User = find(&db, 1);

    let err = assert_err!(Detached::new(&alice).query_fields("Todo"));
    assert!(err.is_method_not_found());
}

#[test]
fn qualify_where_moves_keyed_entries_last() {
    let db = setup();
    let alice: User = find(&db, 1);
    let todos = alice.todos(&db);

    let filters = todos.qualify_where(
        vec![
            Filter::keyed("done", false),
            Filter::condition("title", Op::Like, "write%"),
            Filter::condition("u.id", Op::Gt, 0),
        ],
        "Todo",
    );

    assert_eq!(
        filters,
        vec![
            Filter::condition("Todo.title", Op::Like, "write%"),
            Filter::condition("u.id", Op::Gt, 0),
            Filter::condition("Todo.done", Op::Eq, false),
        ]
    );
}

#[test]
fn build_result_collection_loads_rows() {
    let db = setup();
    let alice: User = find(&db, 1);
    let todos = alice.todos(&db);

    let rows = vec![
        Record::new()
            .with("id", 10)
            .with("user_id", 1)
            .with("title", "a")
            .with("done", 0),
        Record::new()
            .with("id", 11)
            .with("user_id", 1)
            .with("title", "b")
            .with("done", 1),
    ];

    let collection = todos.build_result_collection(rows).unwrap();
    assert_ids!(collection, [10, 11]);
    assert!(collection[1].done);
}

#[test]
fn build_result_collection_of_nothing_is_empty() {
    let db = setup();
    let alice: User = find(&db, 1);

    let collection = alice.todos(&db).build_result_collection(vec![]).unwrap();
    assert!(collection.is_empty());
}

#[test]
fn build_result_collection_surfaces_load_errors() {
    let db = setup();
    let alice: User = find(&db, 1);
    let todos = alice.todos(&db);

    let err = assert_err!(todos.build_result_collection(vec![Record::new().with("id", 1)]));
    assert!(err.is_invalid_model());
}

#[test]
fn forwarding_without_query_fails() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut detached = Detached::new(&alice);

    let err = assert_err!(detached.call("where", vec!["done".into(), false.into()]));
    assert!(err.is_method_not_found());
    assert_eq!(err.to_string(), "method not found: Detached::where");

    let err = assert_err!(detached.select());
    assert_eq!(err.to_string(), "method not found: Detached::select");

    let err = assert_err!(detached.delete(()));
    assert_eq!(err.to_string(), "method not found: Detached::delete");
}

#[test]
fn base_exposes_keys_and_kind() {
    let db = setup();
    let alice: User = find(&db, 1);

    let todos: HasMany<'_, User, Todo> = alice.todos(&db);
    assert_eq!(todos.base().kind(), "HasMany");
    assert_eq!(todos.base().foreign_key(), "user_id");
    assert_eq!(todos.base().local_key(), "id");
    assert!(!todos.base().is_base_query_applied());
}

#[test]
fn separator_only_fields_select_everything() {
    let db = setup();
    let alice: User = find(&db, 1);

    let mut todos = alice.todos(&db);
    todos.field(",").unwrap();

    assert_eq!(
        todos.query_fields("Todo").unwrap(),
        Selection::All("Todo.*".to_string())
    );
    assert_ids!(todos.select().unwrap(), [1, 2, 3]);
}
