use serde_json::json;
use ui_common::{LatLng, MapConfig, MapScene, MapView, Spot};

fn study_spots() -> Vec<Spot> {
    Spot::many_from_value(json!([
        {
            "_id": "1",
            "location": "Bobst",
            "latlng": { "lat": 40.7294279, "lng": -73.9972212 }
        },
        {
            "_id": "2",
            "location": "Paulson",
            "googlemaps": "https://www.google.com/maps/place/John+A.+Paulson+Center"
        },
        {
            "_id": "3",
            "location": "Think Coffee",
            "latlng": { "lat": 40.728338, "lng": -73.995286 }
        }
    ]))
    .unwrap()
}

#[test]
fn test_one_marker_per_spot_with_coordinates() {
    let scene = MapScene::build(&MapConfig::default(), &study_spots());

    let titles: Vec<&str> = scene.markers.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Bobst", "Think Coffee"]);
}

#[test]
fn test_marker_position_is_exact() {
    let scene = MapScene::build(&MapConfig::default(), &study_spots());

    assert_eq!(scene.markers[0].position, LatLng::new(40.7294279, -73.9972212));
    assert_eq!(scene.markers[1].position, LatLng::new(40.728338, -73.995286));
}

#[test]
fn test_popup_links_to_detail_page() {
    let scene = MapScene::build(&MapConfig::default(), &study_spots());

    assert_eq!(scene.markers[0].popup.html(), "<a href='/posts/1'><b>Bobst</b></a>");
    assert_eq!(
        scene.markers[1].popup.html(),
        "<a href='/posts/3'><b>Think Coffee</b></a>"
    );
}

#[test]
fn test_empty_spot_list() {
    let scene = MapScene::build(&MapConfig::default(), &[]);

    assert!(scene.markers.is_empty());
    assert_eq!(scene.tile_layers.len(), 1);
}

#[test]
fn test_only_spot_with_coordinates_is_rendered() {
    let spots = vec![
        Spot::new("a", "No coords", None),
        Spot::new("b", "Coords", Some(LatLng::new(1.5, -2.25))),
    ];
    let scene = MapScene::build(&MapConfig::default(), &spots);

    assert_eq!(scene.markers.len(), 1);
    assert_eq!(scene.markers[0].title, "Coords");
    assert_eq!(scene.markers[0].popup.href, "/posts/b");
}

#[test]
fn test_malformed_post_does_not_hide_valid_spots() {
    let spots = Spot::list_from_value(json!([
        {
            "_id": "1",
            "location": "Bobst",
            "latlng": { "lat": 40.7294279, "lng": -73.9972212 }
        },
        {
            "_id": "2",
            "location": "Paulson",
            "latlng": { "lat": "40.72", "lng": "-73.99" }
        },
        {
            "location": "Missing id",
            "latlng": { "lat": 40.73, "lng": -73.99 }
        },
        {
            "_id": "3",
            "location": "Think Coffee",
            "latlng": { "lat": 40.728338, "lng": -73.995286 }
        }
    ]))
    .unwrap();
    let scene = MapScene::build(&MapConfig::default(), &spots);

    let hrefs: Vec<&str> = scene.markers.iter().map(|m| m.popup.href.as_str()).collect();
    assert_eq!(hrefs, ["/posts/1", "/posts/3"]);
}

#[test]
fn test_duplicates_are_kept() {
    let spot = Spot::new("1", "Bobst", Some(LatLng::new(40.7294279, -73.9972212)));
    let scene = MapScene::build(&MapConfig::default(), &[spot.clone(), spot]);

    assert_eq!(scene.markers.len(), 2);
    assert_eq!(scene.markers[0], scene.markers[1]);
}

#[test]
fn test_view_does_not_depend_on_spots() {
    let config = MapConfig::default();
    let expected = Some(MapView {
        center: LatLng::new(40.73077810827138, -73.99732127116461),
        zoom: 18.0,
    });

    assert_eq!(MapScene::build(&config, &[]).view, expected);
    assert_eq!(MapScene::build(&config, &study_spots()).view, expected);

    let far_away = vec![Spot::new("x", "Elsewhere", Some(LatLng::new(-33.8, 151.2)))];
    assert_eq!(MapScene::build(&config, &far_away).view, expected);
}

#[test]
fn test_custom_detail_route() {
    let config = MapConfig::from_json(r#"{ "detail_route": "/spots/" }"#).unwrap();
    let scene = MapScene::build(&config, &study_spots());

    assert_eq!(scene.markers[0].popup.href, "/spots/1");
}
