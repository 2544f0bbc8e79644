use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::region::fetch_region;

const DOT_SIZE: f64 = 4.0;
const DOT_SPACING: f64 = 6.0;

// Dot-grid occupancy per continent, drawn into a 400x200 view box.
struct ContinentGrid {
    start_x: f64,
    start_y: f64,
    rows: &'static [&'static [u8]],
}

const WORLD_GRID: &[ContinentGrid] = &[
    // North America
    ContinentGrid {
        start_x: 50.0,
        start_y: 50.0,
        rows: &[
            &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
            &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
            &[0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
        ],
    },
    // South America
    ContinentGrid {
        start_x: 120.0,
        start_y: 120.0,
        rows: &[
            &[0, 0, 0, 1, 1, 1, 1, 0],
            &[0, 0, 1, 1, 1, 1, 1, 1],
            &[0, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1, 1, 0, 0],
            &[0, 1, 1, 1, 1, 0, 0, 0],
            &[0, 0, 1, 1, 0, 0, 0, 0],
        ],
    },
    // Europe
    ContinentGrid {
        start_x: 200.0,
        start_y: 50.0,
        rows: &[
            &[0, 0, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1],
            &[0, 1, 1, 1, 1, 1, 1, 0],
            &[0, 0, 1, 1, 1, 1, 0, 0],
        ],
    },
    // Africa
    ContinentGrid {
        start_x: 200.0,
        start_y: 100.0,
        rows: &[
            &[0, 0, 1, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1, 1, 1, 0, 0],
            &[0, 1, 1, 1, 1, 1, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 0],
        ],
    },
    // Asia
    ContinentGrid {
        start_x: 250.0,
        start_y: 50.0,
        rows: &[
            &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
            &[0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
            &[0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
        ],
    },
    // Australia
    ContinentGrid {
        start_x: 300.0,
        start_y: 150.0,
        rows: &[
            &[0, 1, 1, 1, 1, 1, 0],
            &[1, 1, 1, 1, 1, 1, 1],
            &[1, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 0, 0],
        ],
    },
];

struct RegionMarker {
    name: &'static str,
    x: f64,
    y: f64,
    label: &'static str,
}

const REGION_MARKERS: &[RegionMarker] = &[
    RegionMarker { name: "us-east-1", x: 100.0, y: 80.0, label: "N. Virginia" },
    RegionMarker { name: "us-west-2", x: 60.0, y: 75.0, label: "Oregon" },
    RegionMarker { name: "eu-west-1", x: 200.0, y: 65.0, label: "Ireland" },
    RegionMarker { name: "eu-central-1", x: 215.0, y: 70.0, label: "Frankfurt" },
    RegionMarker { name: "ap-southeast-1", x: 300.0, y: 120.0, label: "Singapore" },
    RegionMarker { name: "ap-northeast-1", x: 320.0, y: 80.0, label: "Tokyo" },
    RegionMarker { name: "ap-southeast-2", x: 320.0, y: 170.0, label: "Sydney" },
    RegionMarker { name: "sa-east-1", x: 130.0, y: 140.0, label: "São Paulo" },
];

fn dot_positions() -> Vec<(f64, f64)> {
    let mut dots = Vec::new();
    for continent in WORLD_GRID {
        for (row_index, row) in continent.rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                if *cell == 1 {
                    dots.push((
                        continent.start_x + col_index as f64 * DOT_SPACING,
                        continent.start_y + row_index as f64 * DOT_SPACING,
                    ));
                }
            }
        }
    }
    dots
}

fn active_marker(region: Option<&str>) -> Option<&'static RegionMarker> {
    region.and_then(|name| REGION_MARKERS.iter().find(|marker| marker.name == name))
}

#[function_component(WorldMap)]
pub fn world_map() -> Html {
    let current_region = use_state(|| None::<String>);

    {
        let current_region = current_region.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    current_region.set(fetch_region().await);
                });
                || ()
            },
            (),
        );
    }

    let active_name = active_marker(current_region.as_deref()).map(|marker| marker.name);

    let dots: Html = dot_positions()
        .into_iter()
        .map(|(x, y)| {
            html! {
                <circle
                    cx={x.to_string()}
                    cy={y.to_string()}
                    r={(DOT_SIZE / 2.0).to_string()}
                    fill="#fff"
                    opacity="0.8"
                />
            }
        })
        .collect();

    let markers: Html = REGION_MARKERS
        .iter()
        .map(|marker| {
            let is_current = active_name == Some(marker.name);
            let color = if is_current { "#ff6b6b" } else { "#ff8c42" };
            let opacity = if is_current { "1" } else { "0.8" };
            html! {
                <g
                    key={marker.name}
                    class={classes!("region-marker", is_current.then(|| "pulse"))}
                    transform={format!("translate({},{})", marker.x, marker.y)}
                >
                    <circle r={if is_current { "3" } else { "2" }} fill={color} opacity={opacity} />
                    <text x="5" y="2" fill={color} opacity={opacity} font-size="6" font-family="Arial" font-weight="500">
                        { marker.label }
                    </text>
                    {
                        if is_current {
                            html! {
                                <circle r="4" fill="none" stroke="#ff6b6b" stroke-width="1" opacity="0.5">
                                    <animate attributeName="r" from="4" to="8" dur="1.5s" repeatCount="indefinite" />
                                    <animate attributeName="opacity" from="0.5" to="0" dur="1.5s" repeatCount="indefinite" />
                                </circle>
                            }
                        } else {
                            html! {}
                        }
                    }
                </g>
            }
        })
        .collect();

    let origin = &REGION_MARKERS[0];
    let connection_lines: Html = REGION_MARKERS
        .iter()
        .skip(1)
        .map(|marker| {
            html! {
                <line
                    x1={origin.x.to_string()}
                    y1={origin.y.to_string()}
                    x2={marker.x.to_string()}
                    y2={marker.y.to_string()}
                />
            }
        })
        .collect();

    html! {
        <div class="world-map">
            <svg viewBox="0 0 400 200" preserveAspectRatio="xMidYMid meet">
                <g class="world-map-dots">
                    { dots }
                </g>
                { markers }
                <g stroke="#ff8c42" stroke-width="0.5" opacity="0.3">
                    { connection_lines }
                </g>
            </svg>
            <style>
                {r#"
                    .world-map {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        opacity: 0.8;
                        pointer-events: none;
                    }
                    .world-map svg {
                        width: 100%;
                        height: 100%;
                        background: transparent;
                    }
                    @keyframes marker-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .region-marker.pulse {
                        animation: marker-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn dot_grid_matches_the_occupancy_tables() {
        let expected: usize = WORLD_GRID
            .iter()
            .flat_map(|continent| continent.rows.iter())
            .flat_map(|row| row.iter())
            .filter(|cell| **cell == 1)
            .count();
        assert_eq!(dot_positions().len(), expected);
    }

    #[test]
    fn every_dot_fits_the_view_box() {
        for (x, y) in dot_positions() {
            assert!((0.0..=400.0).contains(&x), "x out of range: {}", x);
            assert!((0.0..=200.0).contains(&y), "y out of range: {}", y);
        }
    }

    #[test]
    fn marker_names_are_unique() {
        for marker in REGION_MARKERS {
            let hits = REGION_MARKERS
                .iter()
                .filter(|other| other.name == marker.name)
                .count();
            assert_eq!(hits, 1, "duplicate marker name: {}", marker.name);
        }
    }

    #[test]
    fn the_default_region_has_a_marker() {
        assert!(active_marker(Some(config::DEFAULT_REGION)).is_some());
    }

    #[test]
    fn unknown_or_unresolved_regions_highlight_nothing() {
        assert!(active_marker(Some("mars-north-1")).is_none());
        assert!(active_marker(None).is_none());
    }
}
