use super::model::{CraftItem, Difficulty};
use super::store::Catalog;

fn craft(
    name: &str,
    description: &str,
    materials: &[&str],
    difficulty: Difficulty,
    time_required: &str,
    category: &str,
) -> CraftItem {
    CraftItem {
        name: name.to_string(),
        description: description.to_string(),
        materials: materials.iter().map(|m| m.to_string()).collect(),
        difficulty,
        time_required: time_required.to_string(),
        category: category.to_string(),
    }
}

/// The five crafts shipped with the server.
pub(super) fn seed_catalog() -> Catalog {
    Catalog::builder()
        .item(
            "paper_airplane",
            craft(
                "Paper Airplane",
                "A simple flying paper craft perfect for beginners",
                &["A4 paper", "steady hands"],
                Difficulty::Easy,
                "5 minutes",
                "paper_crafts",
            ),
        )
        .item(
            "origami_crane",
            craft(
                "Origami Crane",
                "Traditional Japanese paper folding creating an elegant crane",
                &["Square origami paper"],
                Difficulty::Medium,
                "15-20 minutes",
                "origami",
            ),
        )
        .item(
            "friendship_bracelet",
            craft(
                "Friendship Bracelet",
                "Colorful woven bracelet made with embroidery thread",
                &["Embroidery thread (3-4 colors)", "scissors", "tape"],
                Difficulty::Medium,
                "30-45 minutes",
                "jewelry",
            ),
        )
        .item(
            "painted_rock",
            craft(
                "Painted Rock",
                "Decorative rock painted with creative designs",
                &["Smooth rock", "acrylic paints", "paintbrushes", "sealant"],
                Difficulty::Easy,
                "1-2 hours (including drying time)",
                "painting",
            ),
        )
        .item(
            "macrame_plant_hanger",
            craft(
                "Macrame Plant Hanger",
                "Elegant plant hanger made with knotted cord",
                &["Macrame cord", "metal ring", "scissors", "measuring tape"],
                Difficulty::Hard,
                "2-3 hours",
                "home_decor",
            ),
        )
        .instructions(
            "paper_airplane",
            [
                "Take an 8.5 x 11 inch piece of paper",
                "Fold the paper in half lengthwise, then unfold",
                "Fold the top corners down to the center crease",
                "Fold the angled edges down to the center crease again",
                "Fold the plane in half along the center crease",
                "Create wings by folding each side down to align with the bottom",
                "Your paper airplane is ready to fly!",
            ],
        )
        .instructions(
            "origami_crane",
            [
                "Start with a square piece of paper, colored side down",
                "Fold diagonally both ways and unfold",
                "Fold horizontally and vertically, then unfold",
                "Bring the three corners down to the bottom corner using creases as guides",
                "Fold the top flaps into the center, repeat on back",
                "Fold the top triangle down, repeat on back",
                "Pull the sides apart gently and flatten to create a diamond",
                "Fold the top points down to create the head and tail",
                "Pull the wings apart gently while holding the body",
            ],
        )
        .instructions(
            "friendship_bracelet",
            [
                "Cut 4 strands of thread, each about 24 inches long",
                "Tie all strands together with a knot, leaving 2 inches of tail",
                "Tape the knot to a flat surface",
                "Separate strands into pairs (A, B, C, D from left to right)",
                "Take strand A over and under strand B, then pull tight",
                "Repeat the knot with strand A over strand B",
                "Move to strand C, repeat the double knot process",
                "Continue pattern until bracelet is desired length",
                "Tie off with a secure knot",
            ],
        )
        .instructions(
            "painted_rock",
            [
                "Find a smooth, clean rock",
                "Wash and dry the rock thoroughly",
                "Apply a base coat of paint if desired, let dry",
                "Sketch your design lightly with pencil",
                "Paint your design with acrylic paints",
                "Allow each color to dry before adding details",
                "Apply a clear sealant to protect the paint",
                "Let dry completely before handling",
            ],
        )
        .instructions(
            "macrame_plant_hanger",
            [
                "Cut 8 cords, each 3 feet long",
                "Fold all cords in half and attach to metal ring with lark's head knots",
                "Measure 6 inches down and tie square knots with groups of 4 cords",
                "Measure 4 inches down and tie another round of square knots",
                "Separate each group of 4 into 2 groups of 2",
                "Take 2 cords from adjacent groups and tie together 4 inches down",
                "Repeat around to create the basket shape",
                "Measure 8 inches down and tie all cords together with a large knot",
                "Trim excess cord to desired length",
            ],
        )
        .tips(
            "paper_airplane",
            [
                "Use crisp folds for better flight performance",
                "Make sure both wings are even for straight flight",
                "Throw with a firm, level motion",
            ],
        )
        .tips(
            "origami_crane",
            [
                "Use proper origami paper for best results",
                "Make sharp, precise creases",
                "Be patient - it takes practice to master",
            ],
        )
        .tips(
            "friendship_bracelet",
            [
                "Keep tension consistent for even knots",
                "Use a clipboard to hold your work steady",
                "Choose colors that complement each other",
            ],
        )
        .tips(
            "painted_rock",
            [
                "Prime the rock with white paint for brighter colors",
                "Use small brushes for detailed work",
                "Work in thin layers to avoid paint drips",
            ],
        )
        .tips(
            "macrame_plant_hanger",
            [
                "Keep cord lengths consistent",
                "Practice basic macrame knots before starting",
                "Choose a pot that fits snugly in the hanger",
            ],
        )
        .build()
}
