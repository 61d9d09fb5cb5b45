use crate::layout::Node;

/// Last path segment of `T`'s type name, e.g. `Canvas`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit_once("::").map(|(_, t)| t).unwrap_or(base)
}

/// One line per node, indented by depth, with the node's last bounds.
pub fn outline(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    out.push_str(&format!("{:indent$}{} {}", "", node.name(), node.bounds(), indent = depth * 2));
    if node.is_collapsed() {
        out.push_str(" collapsed");
    }
    out.push('\n');
    for child in node.children() {
        write_node(out, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layout::{LayoutCx, Size, Stack, layout_to_size},
        style::Visibility,
        widgets::{Canvas, Widget},
    };

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Canvas>(), "Canvas");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }

    #[test]
    fn test_outline() {
        let mut root: crate::layout::Node = Stack::vbox()
            .child(Canvas::new(10, 5).into_node())
            .child(Canvas::new(10, 5).into_node().with_visibility(Visibility::Collapse))
            .into();
        layout_to_size(&mut root, &mut LayoutCx::new(), Size::new(20, 10));
        assert_eq!(
            outline(&root),
            "VBox (0,0 20x10)\n  Canvas (0,0 10x5)\n  Canvas (0,0 0x0) collapsed\n"
        );
    }
}
