//! The shipped template set.
//!
//! These records seed every [`super::TemplateStore`]. Ids are stable; the
//! embedding corpus and user bookmarks refer to them.

use super::types::Template;

fn builtin(
    id: &str,
    title: &str,
    category: &str,
    description: &str,
    code: &str,
) -> Template {
    Template {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        description: description.into(),
        code: code.into(),
        is_custom: false,
        created_at: None,
    }
}

/// The built-in WinCC Unified JavaScript templates, in display order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        builtin(
            "tag-read",
            "Read Tag Value",
            "Tag Operations",
            "Safely reads values from WinCC tags with error handling. Use this when you need to get current values from PLC tags, sensors, or internal variables. Includes null checking and diagnostic logging.",
            r#"// Read Tag Value - Siemens WinCC Unified
function readTagValue(tagName) {
    try {
        var tagValue = Tags(tagName).Read();
        HMIRuntime.Trace("Read tag: " + tagName + " = " + tagValue);
        return tagValue;
    } catch (error) {
        HMIRuntime.Trace("Error reading tag: " + error.message);
        return null;
    }
}

var motorSpeed = readTagValue("Motor1_Speed");
if (motorSpeed !== null) {
    HMIRuntime.Trace("Motor speed: " + motorSpeed + " RPM");
}"#,
        ),
        builtin(
            "tag-write",
            "Write Tag Value",
            "Tag Operations",
            "Writes values to WinCC tags with validation and error handling. Use this for setting motor speeds, pump controls, recipe values, or any PLC communication. Includes input validation and success confirmation.",
            r#"// Write Tag Value - Siemens WinCC Unified
function writeTagValue(tagName, value) {
    try {
        if (tagName === null || tagName === "") {
            throw new Error("Tag name cannot be empty");
        }
        Tags(tagName).Write(value);
        HMIRuntime.Trace("Wrote tag: " + tagName + " = " + value);
        return true;
    } catch (error) {
        HMIRuntime.Trace("Error writing tag: " + error.message);
        return false;
    }
}

writeTagValue("Motor1_SetPoint", 1500);
writeTagValue("Pump1_Enable", true);"#,
        ),
        builtin(
            "tag-subscribe",
            "Subscribe to Tag Changes",
            "Tag Operations",
            "Subscribe to tag value changes for real-time monitoring. Use this for automatic updates when PLC values change, monitoring critical parameters, or triggering actions based on value changes.",
            r#"// Subscribe to Tag Changes - Siemens WinCC Unified
function subscribeToTag(tagName, callback) {
    try {
        var subscription = Tags(tagName).Subscribe(function (value, quality, timestamp) {
            HMIRuntime.Trace("Tag changed: " + tagName + " = " + value);
            if (typeof callback === "function") {
                callback(value, quality, timestamp);
            }
        });
        return subscription;
    } catch (error) {
        HMIRuntime.Trace("Error subscribing to tag: " + error.message);
        return null;
    }
}

subscribeToTag("Tank1_Level", function (value) {
    if (value > 95) {
        Tags("Tank1_InletValve").Write(false);
    }
});"#,
        ),
        builtin(
            "screen-show",
            "Show Screen",
            "Screen Navigation",
            "Navigate to a different screen with parameter passing. Use this for operator navigation between process displays, detail views, or settings pages. Includes existence checking and trace logging.",
            r#"// Show Screen - Siemens WinCC Unified
function showScreen(screenName) {
    try {
        if (screenName === null || screenName === "") {
            throw new Error("Screen name cannot be empty");
        }
        Screens(screenName).Show();
        HMIRuntime.Trace("Navigated to screen: " + screenName);
        return true;
    } catch (error) {
        HMIRuntime.Trace("Error showing screen: " + error.message);
        return false;
    }
}

showScreen("OverviewScreen");"#,
        ),
        builtin(
            "screen-close",
            "Close Screen",
            "Screen Navigation",
            "Close the current screen or a named popup screen. Use this to dismiss detail views and faceplates and return to the parent display. Includes error handling and trace logging.",
            r#"// Close Screen - Siemens WinCC Unified
function closeScreen(screenName) {
    try {
        Screens(screenName).Close();
        HMIRuntime.Trace("Closed screen: " + screenName);
        return true;
    } catch (error) {
        HMIRuntime.Trace("Error closing screen: " + error.message);
        return false;
    }
}

closeScreen("PumpDetailPopup");"#,
        ),
        builtin(
            "alarm-ack",
            "Acknowledge Alarms",
            "Alarm Handling",
            "Acknowledge active alarms from script. Use this for operator acknowledge buttons, automatic acknowledgement of low-priority alarms, or alarm reset sequences. Includes error handling per alarm.",
            r#"// Acknowledge Alarms - Siemens WinCC Unified
function acknowledgeAlarm(alarmName) {
    try {
        var alarm = Alarms(alarmName);
        alarm.Acknowledge();
        HMIRuntime.Trace("Acknowledged alarm: " + alarmName);
        return true;
    } catch (error) {
        HMIRuntime.Trace("Error acknowledging alarm: " + error.message);
        return false;
    }
}

acknowledgeAlarm("Tank1_HighLevel");"#,
        ),
        builtin(
            "alarm-filter",
            "Filter Active Alarms",
            "Alarm Handling",
            "Read the active alarm list and filter it by priority or area. Use this for custom alarm summaries, counting unacknowledged warnings, or driving alarm banners. Includes sorting by priority.",
            r#"// Filter Active Alarms - Siemens WinCC Unified
function getHighPriorityAlarms(minPriority) {
    try {
        var active = Alarms.GetActiveAlarms();
        var filtered = [];
        for (var i = 0; i < active.length; i++) {
            if (active[i].Priority >= minPriority) {
                filtered.push(active[i]);
            }
        }
        filtered.sort(function (a, b) {
            return b.Priority - a.Priority;
        });
        HMIRuntime.Trace("High priority alarms: " + filtered.length);
        return filtered;
    } catch (error) {
        HMIRuntime.Trace("Error filtering alarms: " + error.message);
        return [];
    }
}

var critical = getHighPriorityAlarms(12);"#,
        ),
        builtin(
            "data-logging",
            "Log Process Data",
            "Data Logging",
            "Record process values with timestamps for later analysis. Use this to log batch data, save shift reports, or keep an audit trail of setpoint changes. Includes timestamped records and error handling.",
            r#"// Log Process Data - Siemens WinCC Unified
function logProcessValue(tagName) {
    try {
        var value = Tags(tagName).Read();
        var record = {
            tag: tagName,
            value: value,
            timestamp: new Date().toISOString()
        };
        HMIRuntime.Trace("Data log: " + JSON.stringify(record));
        return record;
    } catch (error) {
        HMIRuntime.Trace("Error logging data: " + error.message);
        return null;
    }
}

logProcessValue("Tank1_Temperature");
logProcessValue("Tank1_Pressure");"#,
        ),
        builtin(
            "timer-cyclic",
            "Cyclic Timer",
            "Timers & Scheduling",
            "Run a function on a fixed time schedule. Use this for periodic polling, cyclic data logging, or scheduled screen updates. Includes start and stop handling with trace logging.",
            r#"// Cyclic Timer - Siemens WinCC Unified
function startCyclicRead(tagName, intervalMs) {
    try {
        var timerId = HMIRuntime.Timers.SetInterval(function () {
            var value = Tags(tagName).Read();
            HMIRuntime.Trace("Cyclic read " + tagName + " = " + value);
        }, intervalMs);
        HMIRuntime.Trace("Started timer for " + tagName);
        return timerId;
    } catch (error) {
        HMIRuntime.Trace("Error starting timer: " + error.message);
        return null;
    }
}

var timer = startCyclicRead("Motor1_Speed", 5000);"#,
        ),
        builtin(
            "array-sort",
            "Sort and Filter Arrays",
            "Array Operations",
            "Sort and filter arrays of process values. Use this for ranking measurements, finding out-of-range values, or preparing data for display. Includes numeric sort and threshold filtering.",
            r#"// Sort and Filter Arrays - Siemens WinCC Unified
function sortDescending(values) {
    try {
        var sorted = values.slice().sort(function (a, b) {
            return b - a;
        });
        HMIRuntime.Trace("Sorted " + sorted.length + " values");
        return sorted;
    } catch (error) {
        HMIRuntime.Trace("Error sorting array: " + error.message);
        return [];
    }
}

var readings = [72.5, 68.1, 75.3, 70.0];
var ranked = sortDescending(readings);
var overLimit = ranked.filter(function (v) { return v > 71; });"#,
        ),
        builtin(
            "string-format",
            "Format Display Strings",
            "String Operations",
            "Build and parse display strings for operator messages. Use this for formatting units, padding values, or composing status text. Includes safe conversion and error handling.",
            r#"// Format Display Strings - Siemens WinCC Unified
function formatReading(tagName, unit, decimals) {
    try {
        var value = Tags(tagName).Read();
        var text = tagName + ": " + Number(value).toFixed(decimals) + " " + unit;
        HMIRuntime.Trace("Formatted: " + text);
        return text;
    } catch (error) {
        HMIRuntime.Trace("Error formatting string: " + error.message);
        return "";
    }
}

var display = formatReading("Tank1_Temperature", "degC", 1);"#,
        ),
        builtin(
            "math-average",
            "Calculate Statistics",
            "Math & Calculations",
            "Calculate sum, average, and range over a set of readings. Use this for shift statistics, rolling averages, or validating sensor agreement. Includes empty-input protection.",
            r#"// Calculate Statistics - Siemens WinCC Unified
function calculateAverage(values) {
    try {
        if (values.length === 0) {
            throw new Error("No values to average");
        }
        var sum = 0;
        for (var i = 0; i < values.length; i++) {
            sum += values[i];
        }
        var average = sum / values.length;
        HMIRuntime.Trace("Average of " + values.length + " values: " + average);
        return average;
    } catch (error) {
        HMIRuntime.Trace("Error calculating average: " + error.message);
        return null;
    }
}

var mean = calculateAverage([10.2, 10.4, 9.9, 10.1]);"#,
        ),
    ]
}
