use knit::{
    stmt::{Direction, Op, Value},
    Model, Query, Relation, RelationBase, Result,
};
use pretty_assertions::assert_eq;
use std::cell::Cell;
use tests::*;

/// Scopes todos to the parent and counts how often it is asked to.
struct Counting<'a> {
    base: RelationBase<'a, User, Todo>,
    calls: Cell<u32>,
}

impl<'a> Counting<'a> {
    fn new(db: &knit::Db, parent: &'a User) -> Self {
        Counting {
            base: RelationBase::new(
                "Counting",
                parent,
                Some(Query::for_model::<Todo>(db)),
                "user_id",
                "id",
            ),
            calls: Cell::new(0),
        }
    }

    fn filter_count(&self) -> usize {
        self.base.query().unwrap().options().filters.len()
    }
}

impl<'a> Relation<'a> for Counting<'a> {
    type Parent = User;
    type Target = Todo;

    fn base(&self) -> &RelationBase<'a, User, Todo> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut RelationBase<'a, User, Todo> {
        &mut self.base
    }

    fn base_query(&mut self) -> Result<()> {
        self.calls.set(self.calls.get() + 1);

        self.base.apply_base_query_once(|query, parent| {
            query.where_eq("user_id", parent.id);
            Ok(())
        })
    }
}

fn ids(value: Value) -> Vec<i64> {
    value
        .to_list()
        .unwrap()
        .into_iter()
        .map(|row| row.to_record().unwrap().take("id").unwrap().to_i64().unwrap())
        .collect()
}

#[test]
fn chaining_call_returns_the_relation() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let delegated = todos
        .call("where", vec!["done".into(), false.into()])
        .unwrap();
    assert!(delegated.is_relation());

    let relation = delegated.into_relation().unwrap();
    let rows = relation.call("select", vec![]).unwrap().into_value().unwrap();
    assert_eq!(ids(rows), vec![1, 3]);

    let count = todos.call("count", vec![]).unwrap().into_value().unwrap();
    assert_eq!(count, Value::I64(2));
}

#[test]
fn call_with_operator() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    todos
        .call("where", vec!["title".into(), "like".into(), "write%".into()])
        .unwrap()
        .into_relation()
        .unwrap()
        .call("order", vec!["id".into(), "desc".into()])
        .unwrap();

    let rows = todos.call("select", vec![]).unwrap().into_value().unwrap();
    assert_eq!(ids(rows), vec![2, 1]);
}

#[test]
fn call_find_returns_a_record_or_null() {
    let db = setup();
    let alice: User = find(&db, 1);
    let carol: User = find(&db, 3);

    let mut todos = alice.todos(&db);
    let found = todos.call("find", vec![]).unwrap().into_value().unwrap();
    assert_eq!(found.to_record().unwrap().get("user_id"), Some(&Value::I64(1)));

    let mut none = carol.todos(&db);
    let found = none.call("find", vec![]).unwrap().into_value().unwrap();
    assert!(found.is_null());
}

#[test]
fn call_limit_with_offset() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    todos.call("order", vec!["id".into()]).unwrap();
    todos.call("limit", vec![1.into(), 1.into()]).unwrap();

    let rows = todos.call("select", vec![]).unwrap().into_value().unwrap();
    assert_eq!(ids(rows), vec![2]);
}

#[test]
fn unknown_method_is_reported_by_the_query() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let err = assert_err!(todos.call("nope", vec![]));
    assert!(err.is_method_not_found());
    assert_eq!(err.to_string(), "method not found: Query::nope");
}

#[test]
fn bad_arguments_are_rejected() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let err = assert_err!(todos.call("limit", vec!["ten".into()]));
    assert!(err.is_type_conversion());

    let err = assert_err!(todos.call("where", vec!["done".into()]));
    assert!(err.is_invalid_statement());

    let err = assert_err!(todos.call("where", vec!["done".into(), "~".into(), 1.into()]));
    assert!(err.is_invalid_statement());
}

#[test]
fn base_query_runs_each_call_but_applies_once() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = Counting::new(&db, &alice);

    assert_eq!(todos.filter_count(), 0);

    todos.call("where", vec!["done".into(), false.into()]).unwrap();
    assert_eq!(todos.calls.get(), 1);
    assert_eq!(todos.filter_count(), 2);

    todos.call("order", vec!["id".into()]).unwrap();
    todos.limit(10).unwrap();
    let count = todos.count().unwrap();

    assert_eq!(count, 2);
    assert_eq!(todos.calls.get(), 4);
    assert_eq!(todos.filter_count(), 2);
    assert!(todos.base().is_base_query_applied());
}

#[test]
fn variant_base_query_is_applied_once() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    assert_eq!(todos.count().unwrap(), 3);
    assert_eq!(todos.count().unwrap(), 3);
    assert_eq!(todos.base().query().unwrap().options().filters.len(), 1);
}

#[test]
fn typed_chaining() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let open = todos
        .where_eq("done", false)
        .unwrap()
        .order("id", Direction::Desc)
        .unwrap()
        .select()
        .unwrap();

    assert_ids!(open, [3, 1]);
}

#[test]
fn typed_filter_and_paging() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let page = todos
        .filter("id", Op::Ge, 1)
        .unwrap()
        .order("id", Direction::Asc)
        .unwrap()
        .page(2, 2)
        .unwrap()
        .select()
        .unwrap();

    assert_ids!(page, [3]);
}

#[test]
fn typed_find_loads_the_model() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let todo = todos.where_eq("done", true).unwrap().find().unwrap().unwrap();
    assert_eq!(todo.title, "write code");
    assert_eq!(todo.user_id, alice.id);
    assert_eq!(Todo::NAME, "Todo");
}

#[test]
fn page_offset_overflow_is_rejected() {
    let db = setup();
    let alice: User = find(&db, 1);
    let mut todos = alice.todos(&db);

    let err = assert_err!(todos.call("page", vec![Value::I64(i64::MAX), Value::I64(10)]));
    assert!(err.is_invalid_statement());

    let err = assert_err!(todos.page(u64::MAX, 2));
    assert!(err.is_invalid_statement());

    // The rejected pages leave no limit or offset behind.
    assert_eq!(todos.base().query().unwrap().options().offset, None);
    assert_eq!(todos.count().unwrap(), 3);

    // Page zero is clamped to the first page.
    todos.order("id", Direction::Asc).unwrap().page(0, 2).unwrap();
    assert_ids!(todos.select().unwrap(), [1, 2]);
}
