
pub mod models;
pub use models::{Person, Profile, Role, Todo, User};

use knit::Db;
use knit_driver_sqlite::Sqlite;

const SCHEMA: &str = "
CREATE TABLE {p}users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE {p}profiles (id INTEGER PRIMARY KEY, user_id INTEGER NOT NULL, bio TEXT NOT NULL);
CREATE TABLE {p}todos (
    id INTEGER PRIMARY KEY,
    user_id INTEGER NOT NULL,
    title TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE {p}roles (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE {p}role_user (user_id INTEGER NOT NULL, role_id INTEGER NOT NULL);
CREATE TABLE {p}people (id INTEGER PRIMARY KEY, name TEXT NOT NULL, parent_id INTEGER);

INSERT INTO {p}users (id, name) VALUES (1, 'alice'), (2, 'bob'), (3, 'carol');
INSERT INTO {p}profiles (id, user_id, bio) VALUES (1, 1, 'rustacean'), (2, 2, 'gopher');
INSERT INTO {p}todos (id, user_id, title, done) VALUES
    (1, 1, 'write plan', 0),
    (2, 1, 'write code', 1),
    (3, 1, 'ship', 0),
    (4, 2, 'review', 0);
INSERT INTO {p}roles (id, name) VALUES (1, 'admin'), (2, 'editor'), (3, 'viewer');
INSERT INTO {p}role_user (user_id, role_id) VALUES (1, 1), (1, 2), (2, 3);
INSERT INTO {p}people (id, name, parent_id) VALUES
    (1, 'root', NULL),
    (2, 'child-a', 1),
    (3, 'child-b', 1),
    (4, 'grandchild', 2);
";

/// An in-memory database with the fixture schema and rows loaded.
pub fn setup() -> Db {
    setup_with_prefix("")
}

pub fn setup_with_prefix(prefix: &str) -> Db {
    let driver = Sqlite::in_memory().unwrap();
    driver
        .execute_batch(&SCHEMA.replace("{p}", prefix))
        .unwrap();

    Db::builder().table_name_prefix(prefix).build(driver)
}

/// Loads a fixture row by primary key.
pub fn find<M: knit::Model>(db: &Db, id: i64) -> M {
    let record = knit::Query::for_model::<M>(db)
        .where_eq(M::PRIMARY_KEY, id)
        .find()
        .unwrap()
        .unwrap_or_else(|| panic!("no {} with id {id}", M::NAME));

    M::load(record).unwrap()
}
