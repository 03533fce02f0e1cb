//! Map areas and per-scene chest data
//!
//! Area order is the game's iteration order; both the bravery and relic
//! procedures walk [`AREAS`] front to back and the per-seed draw sequence
//! depends on it. `randomizer_check_list` is the subset of an area's
//! monsters consulted by the randomizer reachability checks (champions and
//! event monsters are excluded there).

use crate::monsters::MonsterId;

pub type AreaId = u16;
pub type SceneId = u16;
pub type ChestId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapArea {
    pub id: AreaId,
    pub name: &'static str,
    /// Monster ids present in this area, in encounter-table order.
    pub monsters: &'static [MonsterId],
    /// Subset of `monsters` checked by the randomizer invariants.
    pub randomizer_check_list: &'static [MonsterId],
    /// Scene ids reachable from this area (relic chest candidates).
    pub area_data: &'static [SceneId],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSceneData {
    pub area_id: AreaId,
    pub scene_id: SceneId,
    pub scene_name: &'static str,
    pub chests: &'static [ChestId],
}

/// Area indices used by the reachability invariants.
pub const MOUNTAIN_PATH: usize = 0;
pub const BLUE_CAVES: usize = 1;
pub const STRONGHOLD_DUNGEON: usize = 2;
pub const ANCIENT_WOODS: usize = 3;
pub const SNOWY_PEAKS: usize = 4;
pub const SUN_PALACE: usize = 5;
pub const HORIZON_BEACH: usize = 6;
pub const MAGMA_CHAMBER: usize = 7;
pub const MYSTICAL_WORKSHOP: usize = 8;
pub const UNDERWORLD: usize = 9;
pub const BLOB_BURG: usize = 10;
pub const ABANDONED_TOWER: usize = 11;
pub const FORGOTTEN_WORLD: usize = 12;

pub static AREAS: &[MapArea] = &[
    MapArea {
        id: 0,
        name: "Mountain Path",
        monsters: &[4, 5, 6, 7, 8, 9, 10, 16, 26],
        randomizer_check_list: &[4, 5, 6, 7, 8, 9],
        area_data: &[100, 101, 102, 103],
    },
    MapArea {
        id: 1,
        name: "Blue Caves",
        monsters: &[4, 12, 13, 14, 15, 17, 18, 19, 34],
        randomizer_check_list: &[12, 13, 14, 15, 17, 18],
        area_data: &[110, 111, 112, 113],
    },
    MapArea {
        id: 2,
        name: "Stronghold Dungeon",
        monsters: &[17, 20, 21, 22, 23, 28, 29, 30, 56, 60],
        randomizer_check_list: &[20, 21, 22, 23, 28, 29, 30],
        area_data: &[120, 121, 122, 123, 124],
    },
    MapArea {
        id: 3,
        name: "Ancient Woods",
        monsters: &[14, 22, 23, 27, 35, 38, 45, 47, 52, 86],
        randomizer_check_list: &[27, 35, 38, 45, 47, 52],
        area_data: &[130, 131, 132, 133, 134],
    },
    MapArea {
        id: 4,
        name: "Snowy Peaks",
        monsters: &[11, 15, 33, 39, 41, 44, 48, 54, 107],
        randomizer_check_list: &[11, 33, 39, 41, 44, 48],
        area_data: &[140, 141, 142, 143],
    },
    MapArea {
        id: 5,
        name: "Sun Palace",
        monsters: &[9, 24, 36, 37, 40, 43, 46, 55],
        randomizer_check_list: &[24, 37, 40, 43, 46, 55],
        area_data: &[150, 151, 152, 153],
    },
    MapArea {
        id: 6,
        name: "Horizon Beach",
        monsters: &[42, 51, 57, 63, 95, 100, 102, 103],
        randomizer_check_list: &[42, 51, 57, 63, 102],
        area_data: &[160, 161, 162, 163],
    },
    MapArea {
        id: 7,
        name: "Magma Chamber",
        monsters: &[5, 24, 25, 53, 59, 64, 79, 87, 104],
        randomizer_check_list: &[25, 53, 59, 64, 79, 104],
        area_data: &[170, 171, 172, 173, 174],
    },
    MapArea {
        id: 8,
        name: "Mystical Workshop",
        monsters: &[10, 56, 58, 61, 62, 67, 68, 99],
        randomizer_check_list: &[61, 62, 67, 68, 99],
        area_data: &[180, 181, 182, 183],
    },
    MapArea {
        id: 9,
        name: "Underworld",
        monsters: &[17, 57, 58, 78, 81, 90, 96, 98],
        randomizer_check_list: &[58, 78, 81, 90, 98],
        area_data: &[190, 191, 192, 193],
    },
    MapArea {
        id: 10,
        name: "Blob Burg",
        monsters: &[4, 12, 33, 64, 65, 66, 87],
        randomizer_check_list: &[33, 64, 65, 66, 87],
        area_data: &[200, 201, 202],
    },
    MapArea {
        id: 11,
        name: "Abandoned Tower",
        monsters: &[69, 70, 71, 72, 73, 74, 76, 91, 92],
        randomizer_check_list: &[69, 70, 71, 72, 73, 74],
        area_data: &[210, 211, 212, 213],
    },
    MapArea {
        id: 12,
        name: "Forgotten World",
        monsters: &[75, 77, 88, 89, 94, 100, 101, 106, 108, 109],
        randomizer_check_list: &[75, 77, 88, 89, 101, 106],
        area_data: &[220, 221, 222, 223],
    },
];

pub static AREA_SCENES: &[AreaSceneData] = &[
    AreaSceneData { area_id: 0, scene_id: 100, scene_name: "MountainPath_North1", chests: &[3101, 3102, 3103] },
    AreaSceneData { area_id: 0, scene_id: 101, scene_name: "MountainPath_North3", chests: &[3110, 3111] },
    AreaSceneData { area_id: 0, scene_id: 102, scene_name: "MountainPath_Center2", chests: &[3120, 3121, 3122, 3123] },
    AreaSceneData { area_id: 0, scene_id: 103, scene_name: "MountainPath_West1", chests: &[3130, 3131] },
    AreaSceneData { area_id: 1, scene_id: 110, scene_name: "BlueCave_North1", chests: &[3201, 3202] },
    AreaSceneData { area_id: 1, scene_id: 111, scene_name: "BlueCave_Center1", chests: &[3210, 3211, 3212] },
    AreaSceneData { area_id: 1, scene_id: 112, scene_name: "BlueCave_Champion", chests: &[3220] },
    AreaSceneData { area_id: 1, scene_id: 113, scene_name: "BlueCave_South2", chests: &[3230, 3231, 3232] },
    AreaSceneData { area_id: 2, scene_id: 120, scene_name: "StrongholdDungeon_North1", chests: &[3301, 3302] },
    AreaSceneData { area_id: 2, scene_id: 121, scene_name: "StrongholdDungeon_Center3", chests: &[3310, 3311, 3312] },
    AreaSceneData { area_id: 2, scene_id: 122, scene_name: "StrongholdDungeon_Jail", chests: &[3320, 3321] },
    AreaSceneData { area_id: 2, scene_id: 123, scene_name: "StrongholdDungeon_South1", chests: &[3330] },
    AreaSceneData { area_id: 2, scene_id: 124, scene_name: "StrongholdDungeon_Library", chests: &[3340, 3341] },
    AreaSceneData { area_id: 3, scene_id: 130, scene_name: "AncientWoods_North1", chests: &[3401, 3402, 3403] },
    AreaSceneData { area_id: 3, scene_id: 131, scene_name: "AncientWoods_Center4", chests: &[3410, 3411] },
    AreaSceneData { area_id: 3, scene_id: 132, scene_name: "AncientWoods_TreeOfEvolution", chests: &[3420] },
    AreaSceneData { area_id: 3, scene_id: 133, scene_name: "AncientWoods_East2", chests: &[3430, 3431, 3432] },
    AreaSceneData { area_id: 3, scene_id: 134, scene_name: "AncientWoods_South3", chests: &[3440, 3441] },
    AreaSceneData { area_id: 4, scene_id: 140, scene_name: "SnowyPeaks_East1", chests: &[3501, 3502] },
    AreaSceneData { area_id: 4, scene_id: 141, scene_name: "SnowyPeaks_Summit", chests: &[3510, 3511, 3512] },
    AreaSceneData { area_id: 4, scene_id: 142, scene_name: "SnowyPeaks_Cliffs2", chests: &[3520] },
    AreaSceneData { area_id: 4, scene_id: 143, scene_name: "SnowyPeaks_Caves1", chests: &[3530, 3531] },
    AreaSceneData { area_id: 5, scene_id: 150, scene_name: "SunPalace_North2", chests: &[3601, 3602] },
    AreaSceneData { area_id: 5, scene_id: 151, scene_name: "SunPalace_EastTower", chests: &[3610, 3611] },
    AreaSceneData { area_id: 5, scene_id: 152, scene_name: "SunPalace_Flooded1", chests: &[3620, 3621, 3622] },
    AreaSceneData { area_id: 5, scene_id: 153, scene_name: "SunPalace_Throne", chests: &[3630] },
    AreaSceneData { area_id: 6, scene_id: 160, scene_name: "HorizonBeach_West1", chests: &[3701, 3702, 3703] },
    AreaSceneData { area_id: 6, scene_id: 161, scene_name: "HorizonBeach_Center3", chests: &[3710, 3711] },
    AreaSceneData { area_id: 6, scene_id: 162, scene_name: "HorizonBeach_TreasureCave", chests: &[3720, 3721, 3722, 3723] },
    AreaSceneData { area_id: 6, scene_id: 163, scene_name: "HorizonBeach_East2", chests: &[3730] },
    AreaSceneData { area_id: 7, scene_id: 170, scene_name: "MagmaChamber_North1", chests: &[3801, 3802] },
    AreaSceneData { area_id: 7, scene_id: 171, scene_name: "MagmaChamber_Center2", chests: &[3810, 3811, 3812] },
    AreaSceneData { area_id: 7, scene_id: 172, scene_name: "MagmaChamber_Forge", chests: &[3820, 3821] },
    AreaSceneData { area_id: 7, scene_id: 173, scene_name: "MagmaChamber_South4", chests: &[3830] },
    AreaSceneData { area_id: 7, scene_id: 174, scene_name: "MagmaChamber_LavaLake", chests: &[3840, 3841] },
    AreaSceneData { area_id: 8, scene_id: 180, scene_name: "MysticalWorkshop_North1", chests: &[3901, 3902] },
    AreaSceneData { area_id: 8, scene_id: 181, scene_name: "MysticalWorkshop_Center4", chests: &[3910, 3911, 3912] },
    AreaSceneData { area_id: 8, scene_id: 182, scene_name: "MysticalWorkshop_Vault", chests: &[3920] },
    AreaSceneData { area_id: 8, scene_id: 183, scene_name: "MysticalWorkshop_Tower2", chests: &[3930, 3931] },
    AreaSceneData { area_id: 9, scene_id: 190, scene_name: "Underworld_Entrance", chests: &[4001, 4002] },
    AreaSceneData { area_id: 9, scene_id: 191, scene_name: "Underworld_Center1", chests: &[4010, 4011, 4012] },
    AreaSceneData { area_id: 9, scene_id: 192, scene_name: "Underworld_GrimReach", chests: &[4020, 4021] },
    AreaSceneData { area_id: 9, scene_id: 193, scene_name: "Underworld_SoulWell", chests: &[4030] },
    AreaSceneData { area_id: 10, scene_id: 200, scene_name: "BlobBurg_Entrance", chests: &[4101, 4102] },
    AreaSceneData { area_id: 10, scene_id: 201, scene_name: "BlobBurg_Center2", chests: &[4110, 4111, 4112] },
    AreaSceneData { area_id: 10, scene_id: 202, scene_name: "BlobBurg_KingsChamber", chests: &[4120] },
    AreaSceneData { area_id: 11, scene_id: 210, scene_name: "AbandonedTower_Base1", chests: &[4201, 4202] },
    AreaSceneData { area_id: 11, scene_id: 211, scene_name: "AbandonedTower_Middle3", chests: &[4210, 4211, 4212] },
    AreaSceneData { area_id: 11, scene_id: 212, scene_name: "AbandonedTower_Top1", chests: &[4220, 4221] },
    AreaSceneData { area_id: 11, scene_id: 213, scene_name: "AbandonedTower_Sanctum", chests: &[4230] },
    AreaSceneData { area_id: 12, scene_id: 220, scene_name: "ForgottenWorld_Jungle1", chests: &[4301, 4302, 4303] },
    AreaSceneData { area_id: 12, scene_id: 221, scene_name: "ForgottenWorld_Caves2", chests: &[4310, 4311] },
    AreaSceneData { area_id: 12, scene_id: 222, scene_name: "ForgottenWorld_DracomerLair", chests: &[4320] },
    AreaSceneData { area_id: 12, scene_id: 223, scene_name: "ForgottenWorld_WyrmsDen", chests: &[4330, 4331] },
];
