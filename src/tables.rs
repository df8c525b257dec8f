// ABOUTME: Daniels VDOT reference tables: 5k thresholds and training paces per VDOT
// ABOUTME: Read-only data scanned by the resolver and the pace deriver, VDOT 30 through 85
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Static reference data from Jack Daniels' Running Formula.
//!
//! Both tables are ordered by ascending VDOT. 5k thresholds are non-increasing
//! as VDOT rises. Easy and marathon paces are quoted per mile; threshold,
//! interval and repetition paces are quoted over the sub-distance they are
//! run at on the track.

use vdot_core::models::{Duration, RaceDistance, SubDistance};

use crate::intelligence::training_paces::PaceRow;
use crate::intelligence::vdot::VdotRow;

use RaceDistance::FiveK;
use SubDistance::{Kilometer, Meters200, Meters400, Mile};

macro_rules! vdot_row {
    ($vdot:literal, $h:literal, $m:literal, $s:literal) => {
        VdotRow {
            vdot: $vdot,
            thresholds: &[(FiveK, Duration::from_hms($h, $m, $s))],
        }
    };
}

/// VDOT → race distance → threshold time, ascending VDOT
pub static VDOT_TABLE: &[VdotRow] = &[
    vdot_row!(30, 0, 30, 41),
    vdot_row!(31, 0, 29, 51),
    vdot_row!(32, 0, 29, 5),
    vdot_row!(33, 0, 28, 20),
    vdot_row!(34, 0, 27, 38),
    vdot_row!(35, 0, 26, 59),
    vdot_row!(36, 0, 26, 21),
    vdot_row!(37, 0, 25, 45),
    vdot_row!(38, 0, 25, 10),
    vdot_row!(39, 0, 24, 38),
    vdot_row!(40, 0, 24, 6),
    vdot_row!(41, 0, 23, 36),
    vdot_row!(42, 0, 23, 8),
    vdot_row!(43, 0, 22, 40),
    vdot_row!(44, 0, 22, 14),
    vdot_row!(45, 0, 21, 49),
    vdot_row!(46, 0, 21, 24),
    vdot_row!(47, 0, 21, 1),
    vdot_row!(48, 0, 20, 38),
    vdot_row!(49, 0, 20, 17),
    vdot_row!(50, 0, 19, 56),
    vdot_row!(51, 0, 19, 36),
    vdot_row!(52, 0, 19, 17),
    vdot_row!(53, 0, 18, 58),
    vdot_row!(54, 0, 18, 40),
    vdot_row!(55, 0, 18, 22),
    vdot_row!(56, 0, 18, 5),
    vdot_row!(57, 0, 17, 49),
    vdot_row!(58, 0, 17, 33),
    vdot_row!(59, 0, 17, 18),
    vdot_row!(60, 0, 17, 3),
    vdot_row!(61, 0, 16, 48),
    vdot_row!(62, 0, 16, 34),
    vdot_row!(63, 0, 16, 21),
    vdot_row!(64, 0, 16, 7),
    vdot_row!(65, 0, 15, 55),
    vdot_row!(66, 0, 15, 42),
    vdot_row!(67, 0, 15, 30),
    vdot_row!(68, 0, 15, 18),
    vdot_row!(69, 0, 15, 7),
    vdot_row!(70, 0, 14, 56),
    vdot_row!(71, 0, 14, 45),
    vdot_row!(72, 0, 14, 34),
    vdot_row!(73, 0, 14, 24),
    vdot_row!(74, 0, 14, 14),
    vdot_row!(75, 0, 14, 4),
    vdot_row!(76, 0, 13, 54),
    vdot_row!(77, 0, 13, 45),
    vdot_row!(78, 0, 13, 36),
    vdot_row!(79, 0, 13, 27),
    vdot_row!(80, 0, 13, 18),
    vdot_row!(81, 0, 13, 9),
    vdot_row!(82, 0, 13, 1),
    vdot_row!(83, 0, 12, 53),
    vdot_row!(84, 0, 12, 45),
    vdot_row!(85, 0, 12, 37),
];

/// VDOT → training zone paces, ascending VDOT
pub static PACE_TABLE: &[PaceRow] = &[
    PaceRow {
        vdot: 30,
        easy: ["12:19", "13:30"],
        marathon: "11:03",
        threshold: &[(Meters400, "02:34"), (Kilometer, "06:24"), (Mile, "10:18")],
        interval: &[(Meters400, "02:22")],
        repetition: &[(Meters200, "01:08")],
    },
    PaceRow {
        vdot: 31,
        easy: ["12:00", "13:10"],
        marathon: "10:46",
        threshold: &[(Meters400, "02:30"), (Kilometer, "06:14"), (Mile, "10:03")],
        interval: &[(Meters400, "02:18")],
        repetition: &[(Meters200, "01:06")],
    },
    PaceRow {
        vdot: 32,
        easy: ["11:43", "12:52"],
        marathon: "10:30",
        threshold: &[(Meters400, "02:26"), (Kilometer, "06:05"), (Mile, "09:48")],
        interval: &[(Meters400, "02:15")],
        repetition: &[(Meters200, "01:04")],
    },
    PaceRow {
        vdot: 33,
        easy: ["11:26", "12:34"],
        marathon: "10:15",
        threshold: &[(Meters400, "02:23"), (Kilometer, "05:56"), (Mile, "09:33")],
        interval: &[(Meters400, "02:11")],
        repetition: &[(Meters200, "01:03")],
    },
    PaceRow {
        vdot: 34,
        easy: ["11:11", "12:17"],
        marathon: "10:00",
        threshold: &[(Meters400, "02:19"), (Kilometer, "05:48"), (Mile, "09:20")],
        interval: &[(Meters400, "02:08")],
        repetition: &[(Meters200, "01:01")],
    },
    PaceRow {
        vdot: 35,
        easy: ["10:56", "12:00"],
        marathon: "09:46",
        threshold: &[(Meters400, "02:16"), (Kilometer, "05:40"), (Mile, "09:07")],
        interval: &[(Meters400, "02:05")],
        repetition: &[(Meters200, "01:00"), (Meters400, "02:00")],
    },
    PaceRow {
        vdot: 36,
        easy: ["10:41", "11:45"],
        marathon: "09:33",
        threshold: &[(Meters400, "02:13"), (Kilometer, "05:32"), (Mile, "08:55")],
        interval: &[(Meters400, "02:02")],
        repetition: &[(Meters200, "00:59"), (Meters400, "01:57")],
    },
    PaceRow {
        vdot: 37,
        easy: ["10:28", "11:30"],
        marathon: "09:20",
        threshold: &[(Meters400, "02:10"), (Kilometer, "05:25"), (Mile, "08:43")],
        interval: &[(Meters400, "02:00"), (Kilometer, "05:00")],
        repetition: &[(Meters200, "00:57"), (Meters400, "01:55")],
    },
    PaceRow {
        vdot: 38,
        easy: ["10:15", "11:16"],
        marathon: "09:08",
        threshold: &[(Meters400, "02:07"), (Kilometer, "05:18"), (Mile, "08:32")],
        interval: &[(Meters400, "01:57"), (Kilometer, "04:53")],
        repetition: &[(Meters200, "00:56"), (Meters400, "01:52")],
    },
    PaceRow {
        vdot: 39,
        easy: ["10:02", "11:02"],
        marathon: "08:57",
        threshold: &[(Meters400, "02:05"), (Kilometer, "05:12"), (Mile, "08:22")],
        interval: &[(Meters400, "01:55"), (Kilometer, "04:47")],
        repetition: &[(Meters200, "00:55"), (Meters400, "01:50")],
    },
    PaceRow {
        vdot: 40,
        easy: ["09:50", "10:49"],
        marathon: "08:45",
        threshold: &[(Meters400, "02:02"), (Kilometer, "05:06"), (Mile, "08:12")],
        interval: &[(Meters400, "01:53"), (Kilometer, "04:41")],
        repetition: &[(Meters200, "00:54"), (Meters400, "01:48")],
    },
    PaceRow {
        vdot: 41,
        easy: ["09:39", "10:37"],
        marathon: "08:35",
        threshold: &[(Meters400, "02:00"), (Kilometer, "05:00"), (Mile, "08:02")],
        interval: &[(Meters400, "01:50"), (Kilometer, "04:36")],
        repetition: &[(Meters200, "00:53"), (Meters400, "01:46")],
    },
    PaceRow {
        vdot: 42,
        easy: ["09:28", "10:25"],
        marathon: "08:25",
        threshold: &[(Meters400, "01:58"), (Kilometer, "04:54"), (Mile, "07:53")],
        interval: &[(Meters400, "01:48"), (Kilometer, "04:30")],
        repetition: &[(Meters200, "00:52"), (Meters400, "01:43")],
    },
    PaceRow {
        vdot: 43,
        easy: ["09:17", "10:14"],
        marathon: "08:15",
        threshold: &[(Meters400, "01:55"), (Kilometer, "04:48"), (Mile, "07:44")],
        interval: &[(Meters400, "01:46"), (Kilometer, "04:25")],
        repetition: &[(Meters200, "00:51"), (Meters400, "01:42")],
    },
    PaceRow {
        vdot: 44,
        easy: ["09:07", "10:03"],
        marathon: "08:06",
        threshold: &[(Meters400, "01:53"), (Kilometer, "04:43"), (Mile, "07:35")],
        interval: &[(Meters400, "01:44"), (Kilometer, "04:20")],
        repetition: &[(Meters200, "00:50"), (Meters400, "01:40")],
    },
    PaceRow {
        vdot: 45,
        easy: ["08:57", "09:52"],
        marathon: "07:57",
        threshold: &[(Meters400, "01:51"), (Kilometer, "04:38"), (Mile, "07:27")],
        interval: &[(Meters400, "01:42"), (Kilometer, "04:16")],
        repetition: &[(Meters200, "00:49"), (Meters400, "01:38")],
    },
    PaceRow {
        vdot: 46,
        easy: ["08:48", "09:42"],
        marathon: "07:48",
        threshold: &[(Meters400, "01:49"), (Kilometer, "04:33"), (Mile, "07:19")],
        interval: &[(Meters400, "01:41"), (Kilometer, "04:11")],
        repetition: &[(Meters200, "00:48"), (Meters400, "01:36")],
    },
    PaceRow {
        vdot: 47,
        easy: ["08:39", "09:32"],
        marathon: "07:40",
        threshold: &[(Meters400, "01:47"), (Kilometer, "04:28"), (Mile, "07:12")],
        interval: &[(Meters400, "01:39"), (Kilometer, "04:07")],
        repetition: &[(Meters200, "00:47"), (Meters400, "01:34")],
    },
    PaceRow {
        vdot: 48,
        easy: ["08:30", "09:22"],
        marathon: "07:32",
        threshold: &[(Meters400, "01:46"), (Kilometer, "04:24"), (Mile, "07:04")],
        interval: &[(Meters400, "01:37"), (Kilometer, "04:03")],
        repetition: &[(Meters200, "00:46"), (Meters400, "01:33")],
    },
    PaceRow {
        vdot: 49,
        easy: ["08:22", "09:13"],
        marathon: "07:24",
        threshold: &[(Meters400, "01:44"), (Kilometer, "04:19"), (Mile, "06:57")],
        interval: &[(Meters400, "01:35"), (Kilometer, "03:59")],
        repetition: &[(Meters200, "00:46"), (Meters400, "01:31")],
    },
    PaceRow {
        vdot: 50,
        easy: ["08:14", "09:04"],
        marathon: "07:16",
        threshold: &[(Meters400, "01:42"), (Kilometer, "04:15"), (Mile, "06:51")],
        interval: &[(Meters400, "01:34"), (Kilometer, "03:55")],
        repetition: &[(Meters200, "00:45"), (Meters400, "01:30")],
    },
    PaceRow {
        vdot: 51,
        easy: ["08:06", "08:56"],
        marathon: "07:09",
        threshold: &[(Meters400, "01:40"), (Kilometer, "04:11"), (Mile, "06:44")],
        interval: &[(Meters400, "01:32"), (Kilometer, "03:51")],
        repetition: &[(Meters200, "00:44"), (Meters400, "01:28")],
    },
    PaceRow {
        vdot: 52,
        easy: ["07:59", "08:48"],
        marathon: "07:02",
        threshold: &[(Meters400, "01:39"), (Kilometer, "04:07"), (Mile, "06:38")],
        interval: &[(Meters400, "01:31"), (Kilometer, "03:48")],
        repetition: &[(Meters200, "00:44"), (Meters400, "01:27")],
    },
    PaceRow {
        vdot: 53,
        easy: ["07:51", "08:40"],
        marathon: "06:55",
        threshold: &[(Meters400, "01:37"), (Kilometer, "04:03"), (Mile, "06:32")],
        interval: &[(Meters400, "01:30"), (Kilometer, "03:44")],
        repetition: &[(Meters200, "00:43"), (Meters400, "01:26")],
    },
    PaceRow {
        vdot: 54,
        easy: ["07:44", "08:32"],
        marathon: "06:49",
        threshold: &[(Meters400, "01:36"), (Kilometer, "04:00"), (Mile, "06:26")],
        interval: &[(Meters400, "01:28"), (Kilometer, "03:41")],
        repetition: &[(Meters200, "00:42"), (Meters400, "01:24")],
    },
    PaceRow {
        vdot: 55,
        easy: ["07:38", "08:24"],
        marathon: "06:43",
        threshold: &[(Meters400, "01:34"), (Kilometer, "03:56"), (Mile, "06:20")],
        interval: &[(Meters400, "01:27"), (Kilometer, "03:37")],
        repetition: &[(Meters200, "00:42"), (Meters400, "01:23")],
    },
    PaceRow {
        vdot: 56,
        easy: ["07:31", "08:17"],
        marathon: "06:36",
        threshold: &[(Meters400, "01:33"), (Kilometer, "03:53"), (Mile, "06:15")],
        interval: &[(Meters400, "01:26"), (Kilometer, "03:34")],
        repetition: &[(Meters200, "00:41"), (Meters400, "01:22")],
    },
    PaceRow {
        vdot: 57,
        easy: ["07:25", "08:10"],
        marathon: "06:31",
        threshold: &[(Meters400, "01:32"), (Kilometer, "03:49"), (Mile, "06:09")],
        interval: &[(Meters400, "01:24"), (Kilometer, "03:31")],
        repetition: &[(Meters200, "00:40"), (Meters400, "01:21")],
    },
    PaceRow {
        vdot: 58,
        easy: ["07:18", "08:03"],
        marathon: "06:25",
        threshold: &[(Meters400, "01:31"), (Kilometer, "03:46"), (Mile, "06:04")],
        interval: &[(Meters400, "01:23"), (Kilometer, "03:28")],
        repetition: &[(Meters200, "00:40"), (Meters400, "01:20")],
    },
    PaceRow {
        vdot: 59,
        easy: ["07:12", "07:57"],
        marathon: "06:19",
        threshold: &[(Meters400, "01:29"), (Kilometer, "03:43"), (Mile, "05:59")],
        interval: &[(Meters400, "01:22"), (Kilometer, "03:25")],
        repetition: &[(Meters200, "00:39"), (Meters400, "01:19")],
    },
    PaceRow {
        vdot: 60,
        easy: ["07:06", "07:50"],
        marathon: "06:14",
        threshold: &[(Meters400, "01:28"), (Kilometer, "03:40"), (Mile, "05:54")],
        interval: &[(Meters400, "01:21"), (Kilometer, "03:23")],
        repetition: &[(Meters200, "00:39"), (Meters400, "01:18")],
    },
    PaceRow {
        vdot: 61,
        easy: ["07:01", "07:44"],
        marathon: "06:09",
        threshold: &[(Meters400, "01:27"), (Kilometer, "03:37"), (Mile, "05:50")],
        interval: &[(Meters400, "01:20"), (Kilometer, "03:20")],
        repetition: &[(Meters200, "00:38"), (Meters400, "01:16")],
    },
    PaceRow {
        vdot: 62,
        easy: ["06:55", "07:38"],
        marathon: "06:04",
        threshold: &[(Meters400, "01:26"), (Kilometer, "03:34"), (Mile, "05:45")],
        interval: &[(Meters400, "01:19"), (Kilometer, "03:17")],
        repetition: &[(Meters200, "00:38"), (Meters400, "01:15")],
    },
    PaceRow {
        vdot: 63,
        easy: ["06:50", "07:32"],
        marathon: "05:59",
        threshold: &[(Meters400, "01:25"), (Kilometer, "03:32"), (Mile, "05:41")],
        interval: &[(Meters400, "01:18"), (Kilometer, "03:15")],
        repetition: &[(Meters200, "00:37"), (Meters400, "01:15")],
    },
    PaceRow {
        vdot: 64,
        easy: ["06:45", "07:26"],
        marathon: "05:54",
        threshold: &[(Meters400, "01:24"), (Kilometer, "03:29"), (Mile, "05:36")],
        interval: &[(Meters400, "01:17"), (Kilometer, "03:12")],
        repetition: &[(Meters200, "00:37"), (Meters400, "01:14")],
    },
    PaceRow {
        vdot: 65,
        easy: ["06:40", "07:21"],
        marathon: "05:49",
        threshold: &[(Meters400, "01:23"), (Kilometer, "03:26"), (Mile, "05:32")],
        interval: &[(Meters400, "01:16"), (Kilometer, "03:10")],
        repetition: &[(Meters200, "00:36"), (Meters400, "01:13")],
    },
    PaceRow {
        vdot: 66,
        easy: ["06:35", "07:16"],
        marathon: "05:45",
        threshold: &[(Meters400, "01:22"), (Kilometer, "03:24"), (Mile, "05:28")],
        interval: &[(Meters400, "01:15"), (Kilometer, "03:08")],
        repetition: &[(Meters200, "00:36"), (Meters400, "01:12")],
    },
    PaceRow {
        vdot: 67,
        easy: ["06:30", "07:10"],
        marathon: "05:40",
        threshold: &[(Meters400, "01:21"), (Kilometer, "03:21"), (Mile, "05:24")],
        interval: &[(Meters400, "01:14"), (Kilometer, "03:05"), (Mile, "04:58")],
        repetition: &[(Meters200, "00:35"), (Meters400, "01:11")],
    },
    PaceRow {
        vdot: 68,
        easy: ["06:25", "07:05"],
        marathon: "05:36",
        threshold: &[(Meters400, "01:20"), (Kilometer, "03:19"), (Mile, "05:20")],
        interval: &[(Meters400, "01:13"), (Kilometer, "03:03"), (Mile, "04:55")],
        repetition: &[(Meters200, "00:35"), (Meters400, "01:10")],
    },
    PaceRow {
        vdot: 69,
        easy: ["06:21", "07:00"],
        marathon: "05:32",
        threshold: &[(Meters400, "01:19"), (Kilometer, "03:17"), (Mile, "05:16")],
        interval: &[(Meters400, "01:12"), (Kilometer, "03:01"), (Mile, "04:51")],
        repetition: &[(Meters200, "00:35"), (Meters400, "01:09")],
    },
    PaceRow {
        vdot: 70,
        easy: ["06:16", "06:55"],
        marathon: "05:28",
        threshold: &[(Meters400, "01:18"), (Kilometer, "03:14"), (Mile, "05:13")],
        interval: &[(Meters400, "01:12"), (Kilometer, "02:59"), (Mile, "04:48")],
        repetition: &[(Meters200, "00:34"), (Meters400, "01:08")],
    },
    PaceRow {
        vdot: 71,
        easy: ["06:12", "06:51"],
        marathon: "05:24",
        threshold: &[(Meters400, "01:17"), (Kilometer, "03:12"), (Mile, "05:09")],
        interval: &[(Meters400, "01:11"), (Kilometer, "02:57"), (Mile, "04:45")],
        repetition: &[(Meters200, "00:34"), (Meters400, "01:08")],
    },
    PaceRow {
        vdot: 72,
        easy: ["06:08", "06:46"],
        marathon: "05:20",
        threshold: &[(Meters400, "01:16"), (Kilometer, "03:10"), (Mile, "05:06")],
        interval: &[(Meters400, "01:10"), (Kilometer, "02:55"), (Mile, "04:41")],
        repetition: &[(Meters200, "00:33"), (Meters400, "01:07")],
    },
    PaceRow {
        vdot: 73,
        easy: ["06:04", "06:41"],
        marathon: "05:16",
        threshold: &[(Meters400, "01:15"), (Kilometer, "03:08"), (Mile, "05:02")],
        interval: &[(Meters400, "01:09"), (Kilometer, "02:53"), (Mile, "04:38")],
        repetition: &[(Meters200, "00:33"), (Meters400, "01:06")],
    },
    PaceRow {
        vdot: 74,
        easy: ["06:00", "06:37"],
        marathon: "05:12",
        threshold: &[(Meters400, "01:14"), (Kilometer, "03:06"), (Mile, "04:59")],
        interval: &[(Meters400, "01:08"), (Kilometer, "02:51"), (Mile, "04:35")],
        repetition: &[(Meters200, "00:33"), (Meters400, "01:05")],
    },
    PaceRow {
        vdot: 75,
        easy: ["05:56", "06:33"],
        marathon: "05:09",
        threshold: &[(Meters400, "01:14"), (Kilometer, "03:04"), (Mile, "04:56")],
        interval: &[(Meters400, "01:08"), (Kilometer, "02:49"), (Mile, "04:32")],
        repetition: &[(Meters200, "00:32"), (Meters400, "01:05")],
    },
    PaceRow {
        vdot: 76,
        easy: ["05:52", "06:29"],
        marathon: "05:05",
        threshold: &[(Meters400, "01:13"), (Kilometer, "03:02"), (Mile, "04:53")],
        interval: &[(Meters400, "01:07"), (Kilometer, "02:47"), (Mile, "04:29")],
        repetition: &[(Meters200, "00:32"), (Meters400, "01:04")],
    },
    PaceRow {
        vdot: 77,
        easy: ["05:48", "06:24"],
        marathon: "05:02",
        threshold: &[(Meters400, "01:12"), (Kilometer, "03:00"), (Mile, "04:50")],
        interval: &[(Meters400, "01:06"), (Kilometer, "02:46"), (Mile, "04:27")],
        repetition: &[(Meters200, "00:32"), (Meters400, "01:03")],
    },
    PaceRow {
        vdot: 78,
        easy: ["05:45", "06:20"],
        marathon: "04:59",
        threshold: &[(Meters400, "01:11"), (Kilometer, "02:58"), (Mile, "04:47")],
        interval: &[(Meters400, "01:06"), (Kilometer, "02:44"), (Mile, "04:24")],
        repetition: &[(Meters200, "00:31"), (Meters400, "01:03")],
    },
    PaceRow {
        vdot: 79,
        easy: ["05:41", "06:17"],
        marathon: "04:55",
        threshold: &[(Meters400, "01:10"), (Kilometer, "02:56"), (Mile, "04:44")],
        interval: &[(Meters400, "01:05"), (Kilometer, "02:42"), (Mile, "04:21")],
        repetition: &[(Meters200, "00:31"), (Meters400, "01:02")],
    },
    PaceRow {
        vdot: 80,
        easy: ["05:38", "06:13"],
        marathon: "04:52",
        threshold: &[(Meters400, "01:10"), (Kilometer, "02:54"), (Mile, "04:41")],
        interval: &[(Meters400, "01:04"), (Kilometer, "02:41"), (Mile, "04:18")],
        repetition: &[(Meters200, "00:31"), (Meters400, "01:01")],
    },
    PaceRow {
        vdot: 81,
        easy: ["05:34", "06:09"],
        marathon: "04:49",
        threshold: &[(Meters400, "01:09"), (Kilometer, "02:53"), (Mile, "04:38")],
        interval: &[(Meters400, "01:04"), (Kilometer, "02:39"), (Mile, "04:16")],
        repetition: &[(Meters200, "00:30"), (Meters400, "01:01")],
    },
    PaceRow {
        vdot: 82,
        easy: ["05:31", "06:05"],
        marathon: "04:46",
        threshold: &[(Meters400, "01:08"), (Kilometer, "02:51"), (Mile, "04:35")],
        interval: &[(Meters400, "01:03"), (Kilometer, "02:37"), (Mile, "04:13")],
        repetition: &[(Meters200, "00:30"), (Meters400, "01:00")],
    },
    PaceRow {
        vdot: 83,
        easy: ["05:28", "06:02"],
        marathon: "04:43",
        threshold: &[(Meters400, "01:08"), (Kilometer, "02:49"), (Mile, "04:33")],
        interval: &[(Meters400, "01:02"), (Kilometer, "02:36"), (Mile, "04:11")],
        repetition: &[(Meters200, "00:30"), (Meters400, "01:00")],
    },
    PaceRow {
        vdot: 84,
        easy: ["05:25", "05:58"],
        marathon: "04:40",
        threshold: &[(Meters400, "01:07"), (Kilometer, "02:48"), (Mile, "04:30")],
        interval: &[(Meters400, "01:02"), (Kilometer, "02:34"), (Mile, "04:09")],
        repetition: &[(Meters200, "00:30"), (Meters400, "00:59")],
    },
    PaceRow {
        vdot: 85,
        easy: ["05:22", "05:55"],
        marathon: "04:37",
        threshold: &[(Meters400, "01:06"), (Kilometer, "02:46"), (Mile, "04:27")],
        interval: &[(Meters400, "01:01"), (Kilometer, "02:33"), (Mile, "04:06")],
        repetition: &[(Meters200, "00:29"), (Meters400, "00:59")],
    },
];
