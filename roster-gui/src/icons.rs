use iced::widget::{Svg, svg};
use include_dir::{Dir, include_dir};
use tracing::warn;

static ICONS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets/icons");

const ICON_SIZE: f32 = 16.0;

/// Load a bundled SVG icon by file stem, e.g. `icon("heart")`.
pub fn icon(name: &str) -> Svg<'static> {
    let handle = match ICONS.get_file(format!("{name}.svg")) {
        Some(file) => svg::Handle::from_memory(file.contents()),
        None => {
            warn!("Missing icon: {name}");
            svg::Handle::from_memory(Vec::<u8>::new())
        }
    };

    svg(handle).width(ICON_SIZE).height(ICON_SIZE)
}
