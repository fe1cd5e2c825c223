use crate::app::models::{MatchedFile, TreeNode};

pub struct OutputGenerator;

impl OutputGenerator {
    /// Renders the matched paths as a box-drawing tree diagram, one entry
    /// per line. Siblings are rendered in byte-wise ascending name order,
    /// so the same path set always produces identical output.
    pub fn generate_tree(files: &[MatchedFile]) -> String {
        let mut root = TreeNode::new_dir();
        for file in files {
            let segments: Vec<String> = file
                .relative_path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            root.insert(&segments);
        }

        let mut output = String::new();
        render_node(&root, "", &mut output);
        output
    }

    /// Assembles the full stdout report: the fenced tree block, a blank
    /// line, then each file's header and raw content in discovery order.
    /// Content is emitted untouched, no escaping or truncation.
    pub fn render_report(files: &[MatchedFile]) -> String {
        let mut output = String::from("Directory Structure:\n```\n.\n");
        output.push_str(&Self::generate_tree(files));
        output.push_str("```\n\n");

        for file in files {
            output.push_str("---\n");
            output.push_str(&format!("File: {}\n", file.relative_path.display()));
            output.push_str("---\n");
            output.push_str(&file.content);
            output.push('\n');
        }

        output
    }
}

fn render_node(node: &TreeNode, prefix: &str, output: &mut String) {
    let TreeNode::Dir(children) = node else {
        return;
    };
    let last_index = children.len().saturating_sub(1);
    for (i, (name, child)) in children.iter().enumerate() {
        let is_last = i == last_index;
        output.push_str(prefix);
        output.push_str(if is_last { "└── " } else { "├── " });
        output.push_str(name);
        output.push('\n');

        if matches!(child, TreeNode::Dir(_)) {
            let continuation = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            render_node(child, &continuation, output);
        }
    }
}
