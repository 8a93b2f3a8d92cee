mod common;

use axum::http::StatusCode;
use common::{spawn_app, spawn_empty_app};
use watchlist::models::movie::SortOption;

#[tokio::test]
async fn test_bootstrap_seeds_owner_and_ten_movies() {
    let app = spawn_app().await;

    let owner = app.state.store().get_owner().await.unwrap().unwrap();
    assert_eq!(owner.username, "admin");
    assert_eq!(owner.name, "Admin");

    let movies = app.state.store().list_movies().await.unwrap();
    assert_eq!(movies.len(), 10);
    assert_eq!(
        (
            movies[0].title.as_str(),
            movies[0].year.as_str(),
            movies[0].actor.as_str()
        ),
        ("My Neighbor Totoro", "1988", "akk")
    );
}

#[tokio::test]
async fn test_anonymous_index_lists_movies_without_controls() {
    let mut app = spawn_app().await;

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("10 Titles"));
    assert!(response.body.contains("My Neighbor Totoro"));
    assert!(!response.body.contains("/movie/edit/"));
    assert!(!response.body.contains(r#"name="title""#));
}

#[tokio::test]
async fn test_create_movie_then_list_returns_same_fields() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    let response = app
        .post("/", "title=Spirited%20Away&year=2001&actor=Rumi%20Hiiragi")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Item created."));
    assert!(response.body.contains("Spirited Away"));

    let movies = app.state.store().list_movies().await.unwrap();
    let created = movies.last().unwrap();
    assert_eq!(created.title, "Spirited Away");
    assert_eq!(created.year, "2001");
    assert_eq!(created.actor, "Rumi Hiiragi");
}

#[tokio::test]
async fn test_create_movie_at_exact_length_limits() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    let title = "t".repeat(60);
    let actor = "a".repeat(60);
    let response = app
        .post("/", &format!("title={title}&year=2024&actor={actor}"))
        .await;
    assert!(response.body.contains("Item created."));
    assert_eq!(app.movie_count().await, 11);
}

#[tokio::test]
async fn test_invalid_movie_submission_is_a_no_op() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    let long_title = "t".repeat(61);
    let long_actor = "a".repeat(61);
    for form in [
        "title=&year=2001&actor=someone".to_string(),
        "title=Spirited%20Away&year=20011&actor=someone".to_string(),
        format!("title={long_title}&year=2001&actor=someone"),
        format!("title=Spirited%20Away&year=2001&actor={long_actor}"),
        "title=Spirited%20Away&year=2001".to_string(),
    ] {
        let response = app.post("/", &form).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("Invalid input."), "form: {form}");
        assert_eq!(app.movie_count().await, 10, "form: {form}");
    }
}

#[tokio::test]
async fn test_anonymous_submission_redirects_to_login() {
    let mut app = spawn_app().await;

    app.post("/", "title=Sneaky&year=2001&actor=nobody")
        .await
        .assert_redirect("/login");
    assert_eq!(app.movie_count().await, 10);
}

#[tokio::test]
async fn test_sort_directions_are_reverses() {
    let app = spawn_app().await;

    let asc = app.state.movies.list(SortOption::YearAscending).await.unwrap();
    let desc = app
        .state
        .movies
        .list(SortOption::YearDescending)
        .await
        .unwrap();

    let mut reversed = desc.clone();
    reversed.reverse();
    assert_eq!(asc, reversed);

    let titles: Vec<_> = asc.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(
        titles[4..8],
        [
            "Mahjong",
            "Swallowtail Butterfly",
            "King of Comedy",
            "Devils on the Doorstep"
        ]
    );

    let fallback = app
        .state
        .movies
        .list(SortOption::parse("by_rating"))
        .await
        .unwrap();
    assert_eq!(fallback, asc);
}

#[tokio::test]
async fn test_sort_form_reorders_rendered_list() {
    let mut app = spawn_app().await;

    let asc = app.post("/", "sort_option=year_asc").await;
    assert!(asc.body.find("My Neighbor Totoro") < asc.body.find("The Pork of Music"));

    let desc = app.post("/", "sort_option=year_desc").await;
    assert!(desc.body.find("The Pork of Music") < desc.body.find("My Neighbor Totoro"));
    assert!(desc.body.contains(r#"value="year_desc" selected"#));

    let unknown = app.post("/", "sort_option=nonsense").await;
    assert_eq!(unknown.status, StatusCode::OK);
    assert!(unknown.body.find("My Neighbor Totoro") < unknown.body.find("The Pork of Music"));
}

#[tokio::test]
async fn test_edit_movie() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    let page = app.get("/movie/edit/4").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"value="Leon""#));

    app.post("/movie/edit/4", "title=Leon&year=1994&actor=Jean%20Reno")
        .await
        .assert_redirect("/");
    let movie = app.state.store().get_movie(4).await.unwrap().unwrap();
    assert_eq!(movie.actor, "Jean Reno");

    let home = app.get("/").await;
    assert!(home.body.contains("Item updated."));
}

#[tokio::test]
async fn test_invalid_edit_redirects_back_without_mutation() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    app.post("/movie/edit/4", "title=Leon&year=19945&actor=akk")
        .await
        .assert_redirect("/movie/edit/4");

    let movie = app.state.store().get_movie(4).await.unwrap().unwrap();
    assert_eq!(movie.year, "1994");

    let page = app.get("/movie/edit/4").await;
    assert!(page.body.contains("Invalid input."));
}

#[tokio::test]
async fn test_edit_missing_movie_is_404() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    assert_eq!(app.get("/movie/edit/999").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.post("/movie/edit/999", "title=a&year=1&actor=b")
            .await
            .status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(app.get("/movie/edit/abc").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_movie() {
    let mut app = spawn_app().await;
    app.login_as_admin().await;

    app.post("/movie/delete/1", "").await.assert_redirect("/");
    assert_eq!(app.movie_count().await, 9);
    assert_eq!(app.get("/movie/edit/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.post("/movie/delete/1", "").await.status,
        StatusCode::NOT_FOUND
    );

    let home = app.get("/").await;
    assert!(home.body.contains("Item deleted."));
    assert!(!home.body.contains("My Neighbor Totoro"));
}

#[tokio::test]
async fn test_delete_requires_login() {
    let mut app = spawn_app().await;

    app.post("/movie/delete/1", "")
        .await
        .assert_redirect("/login");
    assert_eq!(app.movie_count().await, 10);
}

#[tokio::test]
async fn test_search_title_only_match() {
    let mut app = spawn_app().await;

    let response = app.post("/search", "search_term=Totoro").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"Results for "Totoro""#));

    let results = app.state.movies.search("Totoro").await.unwrap();
    assert_eq!(results.by_title.len(), 1);
    assert_eq!(results.by_title[0].title, "My Neighbor Totoro");
    assert!(results.by_actor.is_empty());
    assert!(response.body.contains(r#"class="by-actor empty""#));
}

#[tokio::test]
async fn test_search_matches_title_and_actor_independently() {
    let app = spawn_app().await;

    let results = app.state.movies.search("akk").await.unwrap();
    assert!(results.by_title.is_empty());
    assert_eq!(results.by_actor.len(), 2);
}

#[tokio::test]
async fn test_search_page_renders_form() {
    let mut app = spawn_app().await;

    let response = app.get("/search").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="search_term""#));
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let mut app = spawn_empty_app().await;

    let response = app.get("/no/such/page").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page Not Found"));
}

#[tokio::test]
async fn test_empty_site_renders_index() {
    let mut app = spawn_empty_app().await;

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("0 Titles"));
}
