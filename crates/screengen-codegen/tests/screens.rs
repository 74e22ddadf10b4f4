//! End-to-end compilation of a complete screen document.

#![cfg(all(feature = "compose", feature = "swiftui"))]

use screengen_codegen::{compile, generator, Target};
use screengen_core::Document;

const INVENTORY: &str = include_str!("fixtures/inventory.json");

#[test]
fn test_inventory_compose() {
    let code = compile(INVENTORY, Target::Compose).unwrap();
    insta::assert_snapshot!(code.trim_end(), @r##"
    @file:Suppress("UnusedImport")

    package ui.generated

    import androidx.compose.foundation.layout.*
    import androidx.compose.foundation.rememberScrollState
    import androidx.compose.foundation.verticalScroll
    import androidx.compose.foundation.horizontalScroll
    import androidx.compose.foundation.lazy.LazyColumn
    import androidx.compose.foundation.lazy.LazyRow
    import androidx.compose.foundation.lazy.items
    import androidx.compose.material3.Text
    import androidx.compose.runtime.Composable
    import androidx.compose.ui.Alignment
    import androidx.compose.ui.Modifier
    import androidx.compose.ui.unit.dp

    @Composable
    fun InventoryScreen(
        items: List<Any> = emptyList()
    ) {
      Box(Modifier.fillMaxSize()) {
        Column(modifier = Modifier.fillMaxWidth().padding(start = 16.dp, top = 16.dp, end = 16.dp, bottom = 16.dp), verticalArrangement = Arrangement.spacedBy(12.dp)) {
          Text("Inventory")
          LazyRow(horizontalArrangement = Arrangement.spacedBy(8.dp)) {
            items(items) { item ->
              ZaProductCard(title = item.name, stock = 3, featured = false, modifier = Modifier.width(120.dp))
            }
          }
          Spacer(Modifier.height(0.dp).weight(1f))
          if (showFooter) {
            Text(footerText)
          }
          Box(Modifier.align(Alignment.BottomEnd).padding(end = 16.dp).padding(bottom = 16.dp)) {
            ZaFab(icon = "plus")
          }
        }
      }
    }
    "##);
}

#[test]
fn test_inventory_swiftui() {
    let code = compile(INVENTORY, Target::SwiftUI).unwrap();
    insta::assert_snapshot!(code.trim_end(), @r##"
    import SwiftUI

    struct InventoryScreen: View {
        var items: [Any] = []

        var body: some View {
            ZStack(alignment: .center) {
        VStack(spacing: 12) {
          Text("Inventory")
          ScrollView(.horizontal, showsIndicators: false) {
            HStack(spacing: 8) {
              ForEach(items.indices, id: \.self) { idx in
                let item = items[idx]
                ZaProductCard(title: item.name, stock: 3, featured: false).frame(width: 120)
              }
            }
          }
          Spacer()
          if showFooter {
            Text(footerText)
          }
          ZStack(alignment: .bottomTrailing) {
            ZaFab(icon: "plus")
          }.padding(.trailing, 16).padding(.bottom, 16)
        }.frame(maxWidth: .infinity).padding(EdgeInsets(top: 16, leading: 16, bottom: 16, trailing: 16))
            }
        }
    }

    #Preview {
        InventoryScreen()
    }
    "##);
}

#[test]
fn test_output_ends_with_single_newline() {
    for target in Target::ALL {
        let code = compile(INVENTORY, *target).unwrap();
        assert!(code.ends_with("}\n"), "{target}");
        assert!(!code.ends_with("\n\n"), "{target}");
    }
}

#[test]
fn test_compile_is_deterministic() {
    let document = Document::from_json(INVENTORY).unwrap();
    for target in Target::ALL {
        let generator = generator(*target);
        let first = generator.generate_screen(&document).unwrap();
        let second = generator.generate_screen(&document).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_body_starts_at_body_level() {
    let document = Document::from_json(INVENTORY).unwrap();
    for target in Target::ALL {
        let body = generator(*target).generate_body(&document.root);
        assert!(body.starts_with("    "), "{target}");
        assert!(!body.starts_with("     "), "{target}");
        assert_eq!(body.matches("showFooter").count(), 1, "{target}");
    }
}
