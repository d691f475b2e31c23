use todostack_core::db::open_db_in_memory;
use todostack_core::{
    ItemChanges, ItemService, ListService, NewItem, RepoError, Route, SqliteItemRepository,
    SqliteListRepository, DEFAULT_DUE_OFFSET_MS,
};
use uuid::Uuid;

fn list_service(
    conn: &rusqlite::Connection,
) -> ListService<SqliteListRepository<'_>, SqliteItemRepository<'_>> {
    ListService::new(
        SqliteListRepository::try_new(conn).unwrap(),
        SqliteItemRepository::try_new(conn).unwrap(),
    )
}

fn item_service(
    conn: &rusqlite::Connection,
) -> ItemService<SqliteListRepository<'_>, SqliteItemRepository<'_>> {
    ItemService::new(
        SqliteListRepository::try_new(conn).unwrap(),
        SqliteItemRepository::try_new(conn).unwrap(),
    )
}

#[test]
fn create_list_returns_detail_destination() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);

    let (list, destination) = lists.create_list("Groceries").unwrap();
    assert_eq!(destination, Route::ListDetail(list.uuid));
    assert_eq!(destination.path(), format!("/list/{}/", list.uuid));
}

#[test]
fn list_detail_returns_items_sorted_by_due_date() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);
    let items = item_service(&conn);

    let (list, _) = lists.create_list("Groceries").unwrap();
    for (title, due_at) in [("later", 2_000), ("sooner", 1_000)] {
        items
            .create_item(
                list.uuid,
                NewItem {
                    title: title.to_string(),
                    description: None,
                    due_at: Some(due_at),
                },
            )
            .unwrap();
    }

    let detail = lists.list_detail(list.uuid).unwrap();
    assert_eq!(detail.list, list);
    let titles: Vec<&str> = detail.items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, ["sooner", "later"]);
}

#[test]
fn list_detail_for_missing_list_is_a_visible_error() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);

    let missing = Uuid::new_v4();
    let err = lists.list_detail(missing).unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(id) if id == missing));
}

#[test]
fn delete_list_lands_on_the_index() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);

    let (list, _) = lists.create_list("Groceries").unwrap();
    let destination = lists.delete_list(list.uuid).unwrap();
    assert_eq!(destination, Route::Index);
    assert!(lists.overview().unwrap().is_empty());
}

#[test]
fn draft_item_seeds_owning_list_and_default_due_date() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);
    let items = item_service(&conn);

    let (list, _) = lists.create_list("Groceries").unwrap();

    let before = todostack_core::model::now_epoch_ms();
    let draft = items.draft_item(list.uuid).unwrap();
    let after = todostack_core::model::now_epoch_ms();

    assert_eq!(draft.list, list);
    assert!(draft.due_at >= before + DEFAULT_DUE_OFFSET_MS);
    assert!(draft.due_at <= after + DEFAULT_DUE_OFFSET_MS);
}

#[test]
fn draft_item_for_missing_list_fails_not_found() {
    let conn = open_db_in_memory().unwrap();
    let items = item_service(&conn);

    let missing = Uuid::new_v4();
    let err = items.draft_item(missing).unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(id) if id == missing));
}

#[test]
fn create_item_lands_on_owning_list_detail() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);
    let items = item_service(&conn);

    let (list, _) = lists.create_list("Groceries").unwrap();
    let (item, destination) = items
        .create_item(
            list.uuid,
            NewItem {
                title: "Milk".to_string(),
                description: None,
                due_at: None,
            },
        )
        .unwrap();

    assert_eq!(item.list_uuid, list.uuid);
    assert_eq!(item.due_at, item.created_at + DEFAULT_DUE_OFFSET_MS);
    assert_eq!(destination, Route::ListDetail(list.uuid));
}

#[test]
fn update_item_moves_it_and_lands_on_the_new_owner() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);
    let items = item_service(&conn);

    let (groceries, _) = lists.create_list("Groceries").unwrap();
    let (errands, _) = lists.create_list("Errands").unwrap();
    let (item, _) = items
        .create_item(
            groceries.uuid,
            NewItem {
                title: "Milk".to_string(),
                description: None,
                due_at: Some(1_000),
            },
        )
        .unwrap();

    let (updated, destination) = items
        .update_item(
            item.uuid,
            ItemChanges {
                list_uuid: errands.uuid,
                title: "Oat milk".to_string(),
                description: Some("barista blend".to_string()),
                due_at: 2_000,
            },
        )
        .unwrap();

    assert_eq!(updated.created_at, item.created_at);
    assert_eq!(destination, Route::ListDetail(errands.uuid));
    assert!(lists.list_detail(groceries.uuid).unwrap().items.is_empty());
    assert_eq!(lists.list_detail(errands.uuid).unwrap().items.len(), 1);
}

#[test]
fn delete_item_lands_on_the_pre_deletion_owner() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);
    let items = item_service(&conn);

    let (list, _) = lists.create_list("Groceries").unwrap();
    let (item, _) = items
        .create_item(
            list.uuid,
            NewItem {
                title: "Milk".to_string(),
                description: None,
                due_at: None,
            },
        )
        .unwrap();

    let destination = items.delete_item(item.uuid).unwrap();
    assert_eq!(destination, Route::ListDetail(list.uuid));

    let err = items.get_item(item.uuid).unwrap_err();
    assert!(matches!(err, RepoError::ItemNotFound(id) if id == item.uuid));
}

#[test]
fn duplicate_title_surfaces_through_the_service() {
    let conn = open_db_in_memory().unwrap();
    let lists = list_service(&conn);

    lists.create_list("Groceries").unwrap();
    let err = lists.create_list("Groceries").unwrap_err();
    assert!(matches!(err, RepoError::DuplicateTitle(title) if title == "Groceries"));
}
