pub mod boot_screen;
pub mod desktop_icons;
pub mod dock;
pub mod menu_bar;
pub mod workspace_canvas;
