use trellis::{
    Constraints, CrossAlign, Insets, Justify, Layout, LayoutCx, Node, Padding, Rect, Size, Spacer,
    Stack, TableLayout, Text, Widget, debug,
};

fn main() {
    trellis::init_logging();

    let mut table = TableLayout::with_size(2, 2);
    table.set_cell(0, 0, Text::new("Name").into_node());
    table.set_cell(0, 1, Text::new("Size").into_node());
    table.set_cell(1, 0, Text::new("layout.rs").into_node());
    table.set_cell(1, 1, Text::new("12 KiB").into_node());

    let mut root: Node = Stack::vbox()
        .justify(Justify::Start)
        .align(CrossAlign::Stretch)
        .child(Padding::new(Insets::all(4), Text::new("Files").into_node()))
        .child(Spacer::height(8))
        .child(table)
        .into();

    // RUST_LOG=trellis::layout=trace prints every constraint on the way down.
    let mut cx = LayoutCx::new().with_trace(true);
    let size = root.layout(&mut cx, Constraints::loose(Size::new(320, 240)));
    root.set_bounds(&mut cx, Rect::from_xywh(0, 0, size.width, size.height));

    println!("{} layout calls, root {size}", cx.layout_calls());
    print!("{}", debug::outline(&root));
}
