use todostack_core::db::open_db_in_memory;
use todostack_core::{
    ItemRepository, ListRepository, RepoError, SqliteItemRepository, SqliteListRepository,
    TodoItem, TodoList, DEFAULT_DUE_OFFSET_MS,
};

#[test]
fn deleting_a_list_deletes_every_item_it_owns() {
    let conn = open_db_in_memory().unwrap();
    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();

    let list = TodoList::new("Groceries").unwrap();
    lists.create_list(&list).unwrap();

    let mut owned_ids = Vec::new();
    for title in ["Milk", "Bread", "Butter"] {
        let item = TodoItem::new(list.uuid, title, None, None).unwrap();
        items.create_item(&item).unwrap();
        owned_ids.push(item.uuid);
    }

    lists.delete_list(list.uuid).unwrap();

    let list_err = lists.get_list(list.uuid).unwrap_err();
    assert!(matches!(list_err, RepoError::ListNotFound(id) if id == list.uuid));

    for id in owned_ids {
        let err = items.get_item(id).unwrap_err();
        assert!(matches!(err, RepoError::ItemNotFound(missing) if missing == id));
    }
}

#[test]
fn cascade_leaves_other_lists_untouched() {
    let conn = open_db_in_memory().unwrap();
    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();

    let groceries = TodoList::new("Groceries").unwrap();
    let errands = TodoList::new("Errands").unwrap();
    lists.create_list(&groceries).unwrap();
    lists.create_list(&errands).unwrap();

    let doomed = TodoItem::new(groceries.uuid, "Milk", None, None).unwrap();
    let survivor = TodoItem::new(errands.uuid, "Post office", None, None).unwrap();
    items.create_item(&doomed).unwrap();
    items.create_item(&survivor).unwrap();

    lists.delete_list(groceries.uuid).unwrap();

    let remaining = items.list_items_for_list(errands.uuid).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].uuid, survivor.uuid);
}

// The end-to-end walk from the product brief: create a list, add an item
// with no due date, check the one-week default, delete the list, and watch
// the item disappear with it.
#[test]
fn groceries_milk_walkthrough() {
    let conn = open_db_in_memory().unwrap();
    let lists = SqliteListRepository::try_new(&conn).unwrap();
    let items = SqliteItemRepository::try_new(&conn).unwrap();

    let groceries = TodoList::new("Groceries").unwrap();
    lists.create_list(&groceries).unwrap();

    let milk = TodoItem::new(groceries.uuid, "Milk", None, None).unwrap();
    items.create_item(&milk).unwrap();

    let stored = items.get_item(milk.uuid).unwrap();
    assert_eq!(stored.due_at, stored.created_at + DEFAULT_DUE_OFFSET_MS);

    lists.delete_list(groceries.uuid).unwrap();

    let err = items.get_item(milk.uuid).unwrap_err();
    assert!(matches!(err, RepoError::ItemNotFound(id) if id == milk.uuid));
}
