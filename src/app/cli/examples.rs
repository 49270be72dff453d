const EXAMPLES: &str = r#"Usage Examples:
================================================================================
1. Basic usage (interactive):
   gametree

2. Basic usage with command-line arguments:
   gametree --game-name "My Awesome Game" --root-dir ~/Projects

3. Specify game engine:
   gametree --game-name "My Unity Game" --engine Unity

4. Specify target platforms:
   gametree --game-name "Mobile Game" --platforms Windows,Android,iOS

5. Full example with all parameters:
   gametree --game-name "Space Adventure" --root-dir ~/Games --engine Unreal \
            --platforms Windows,PlayStation,Xbox

6. Create a project and then sweep its temporary files:
   gametree --game-name "My Game"
   gametree sweep --project-root MyGame --age 30

7. Preview a sweep without deleting anything:
   gametree sweep --project-root MyGame --dry-run
================================================================================

The generated structure includes:

- Production pipeline directories (Pre-Production, Production, Post-Production)
- Development directories (Source, Assets, Documentation, Tests, Scripts, ...)
- Engine-specific directories for the chosen engine
- One Build/<Platform> directory per selected platform
- A tmp/ workspace with a cleanup wrapper in Scripts/Tools

Each directory carries a description.txt explaining its purpose."#;

/// Print example invocations. Performs no filesystem writes.
pub(super) fn print_examples() {
    println!("{EXAMPLES}");
}
