use navgraph2d::core::math::Vector2;

/// Helper function to create json string from a point loop to be used for debugging.
pub fn to_debug_json_str(points: &[Vector2<f64>]) -> String {
    format!(
        r#"
{{
    "points": [
        {}
    ]
}}
"#,
        points
            .iter()
            .map(|p| format!("[{}, {}]", p.x, p.y))
            .collect::<Vec<_>>()
            .join(",\n        ")
    )
}
