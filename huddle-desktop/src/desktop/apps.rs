#[derive(Debug, Clone, PartialEq)]
pub struct DesktopShortcut {
    pub name: &'static str,
    pub icon: &'static str,
}

pub fn desktop_shortcuts() -> Vec<DesktopShortcut> {
    vec![
        DesktopShortcut {
            name: "关于我们",
            icon: "📋",
        },
        DesktopShortcut {
            name: "游戏说明",
            icon: "📖",
        },
        DesktopShortcut {
            name: "系统设置",
            icon: "⚙️",
        },
    ]
}
