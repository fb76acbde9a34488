//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use cheese_db::models::character::{Character, CreateCharacter};
use cheese_db::models::inventory::{CreateInventory, Inventory};
use cheese_db::models::item::{CreateItem, Item};
use cheese_db::models::profile::{Profile, ProfileKind};
use cheese_db::models::quest::{CreateQuest, Quest};
use cheese_db::models::status::{ItemType, UserRole};
use cheese_db::models::user::{CreateUser, User};
use cheese_db::repositories::{
    CharacterRepo, InventoryRepo, ItemRepo, ProfileRepo, QuestRepo, UserRepo,
};
use sqlx::PgPool;

pub fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        role_id: None,
    }
}

pub fn new_character(player_profile_id: i64, name: &str) -> CreateCharacter {
    CreateCharacter {
        player_profile_id,
        name: name.to_string(),
        customization: None,
    }
}

pub fn new_quest(content_creator_profile_id: i64, title: &str) -> CreateQuest {
    CreateQuest {
        content_creator_profile_id,
        title: title.to_string(),
        description: "Recover the stolen wheel".to_string(),
        narrative: "The harbour smells of brie.".to_string(),
        is_active: None,
    }
}

pub fn new_item(inventory_id: i64, name: &str, item_type_id: i16) -> CreateItem {
    CreateItem {
        inventory_id,
        name: name.to_string(),
        description: format!("A {name}"),
        item_type_id,
    }
}

pub async fn create_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(pool, &new_user(email)).await.unwrap()
}

pub async fn create_creator(pool: &PgPool, email: &str) -> (User, Profile) {
    let input = CreateUser {
        role_id: Some(UserRole::ContentCreator.id()),
        ..new_user(email)
    };
    let user = UserRepo::create(pool, &input).await.unwrap();
    let profile = ProfileRepo::create(pool, ProfileKind::ContentCreator, user.id)
        .await
        .unwrap();
    (user, profile)
}

/// A player user with one character, one inventory, and one item.
pub struct PlayerFixture {
    pub user: User,
    pub profile: Profile,
    pub character: Character,
    pub inventory: Inventory,
    pub item: Item,
}

pub async fn create_player(pool: &PgPool, email: &str, character_name: &str) -> PlayerFixture {
    let user = create_user(pool, email).await;
    let profile = ProfileRepo::create(pool, ProfileKind::Player, user.id)
        .await
        .unwrap();
    let character = CharacterRepo::create(pool, &new_character(profile.id, character_name))
        .await
        .unwrap();
    let inventory = InventoryRepo::create(
        pool,
        &CreateInventory {
            character_id: character.id,
        },
    )
    .await
    .unwrap();
    let item = ItemRepo::create(
        pool,
        &new_item(inventory.id, "Rope", ItemType::Equipment.id()),
    )
    .await
    .unwrap();

    PlayerFixture {
        user,
        profile,
        character,
        inventory,
        item,
    }
}

pub async fn create_quest(pool: &PgPool, creator_profile_id: i64, title: &str) -> Quest {
    QuestRepo::create(pool, &new_quest(creator_profile_id, title))
        .await
        .unwrap()
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    n
}
