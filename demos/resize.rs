use trellis::{
    Align, App, Button, Canvas, CrossAlign, Insets, Justify, Padding, Stack, Text, Widget,
};

fn main() -> anyhow::Result<()> {
    let toolbar = Stack::hbox()
        .justify(Justify::SpaceBetween)
        .align(CrossAlign::Center)
        .child(Button::label("Open").into_node())
        .child(Button::label("Save").into_node())
        .child(Button::label("Quit").into_node());

    let body = Stack::hbox()
        .align(CrossAlign::Stretch)
        .child(Text::new("Resize the window and run with RUST_LOG=debug to watch the tree.").into_node())
        .flex(
            Canvas::new(120, 80)
                .on_bounds(|r| log::info!("canvas placed at {r}"))
                .into_node(),
            1,
        );

    let root = Stack::vbox()
        .align(CrossAlign::Stretch)
        .child(Padding::new(Insets::all(8), toolbar))
        .flex(Padding::new(Insets::symmetric(8, 4), body), 1)
        .child(Align::new(Button::label("Status").into_node()).width_factor(1.0));

    App::new(root)
        .with_title("Resize demo")
        .with_size(640, 360)
        .run()
}
