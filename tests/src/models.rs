use knit::{
    stmt::{Record, Value},
    BelongsTo, BelongsToMany, Db, HasMany, HasOne, Model, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl Model for User {
    const NAME: &'static str = "User";
    const TABLE: &'static str = "users";

    fn load(mut record: Record) -> Result<Self> {
        Ok(User {
            id: record.take("id")?.to_i64()?,
            name: record.take("name")?.to_string()?,
        })
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

impl User {
    pub fn profile<'a>(&'a self, db: &Db) -> HasOne<'a, User, Profile> {
        HasOne::new(db, self, "user_id", "id")
    }

    pub fn todos<'a>(&'a self, db: &Db) -> HasMany<'a, User, Todo> {
        HasMany::new(db, self, "user_id", "id")
    }

    pub fn roles<'a>(&'a self, db: &Db) -> BelongsToMany<'a, User, Role> {
        BelongsToMany::new(db, self, "role_user", "role_id", "user_id")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub bio: String,
}

impl Model for Profile {
    const NAME: &'static str = "Profile";
    const TABLE: &'static str = "profiles";

    fn load(mut record: Record) -> Result<Self> {
        Ok(Profile {
            id: record.take("id")?.to_i64()?,
            user_id: record.take("user_id")?.to_i64()?,
            bio: record.take("bio")?.to_string()?,
        })
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "user_id" => Some(self.user_id.into()),
            "bio" => Some(self.bio.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub done: bool,
}

impl Model for Todo {
    const NAME: &'static str = "Todo";
    const TABLE: &'static str = "todos";

    fn load(mut record: Record) -> Result<Self> {
        Ok(Todo {
            id: record.take("id")?.to_i64()?,
            user_id: record.take("user_id")?.to_i64()?,
            title: record.take("title")?.to_string()?,
            done: record.take("done")?.to_bool()?,
        })
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "user_id" => Some(self.user_id.into()),
            "title" => Some(self.title.as_str().into()),
            "done" => Some(self.done.into()),
            _ => None,
        }
    }
}

impl Todo {
    pub fn user<'a>(&'a self, db: &Db) -> BelongsTo<'a, Todo, User> {
        BelongsTo::new(db, self, "user_id", "id")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

impl Model for Role {
    const NAME: &'static str = "Role";
    const TABLE: &'static str = "roles";

    fn load(mut record: Record) -> Result<Self> {
        Ok(Role {
            id: record.take("id")?.to_i64()?,
            name: record.take("name")?.to_string()?,
        })
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

/// People form a tree through `parent_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl Model for Person {
    const NAME: &'static str = "Person";
    const TABLE: &'static str = "people";

    fn load(mut record: Record) -> Result<Self> {
        Ok(Person {
            id: record.take("id")?.to_i64()?,
            name: record.take("name")?.to_string()?,
            parent_id: record.take("parent_id")?.to_option_i64()?,
        })
    }

    fn get(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "parent_id" => Some(self.parent_id.into()),
            _ => None,
        }
    }
}

impl Person {
    pub fn children<'a>(&'a self, db: &Db) -> HasMany<'a, Person, Person> {
        let mut children = HasMany::new(db, self, "parent_id", "id");
        knit::Relation::mark_self_relation(&mut children);
        children
    }

    pub fn parent<'a>(&'a self, db: &Db) -> BelongsTo<'a, Person, Person> {
        let mut parent = BelongsTo::new(db, self, "parent_id", "id");
        knit::Relation::mark_self_relation(&mut parent);
        parent
    }
}
