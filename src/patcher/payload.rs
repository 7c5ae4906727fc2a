use crate::patcher::types::Payload;

/// File the default patch rewrites, relative to the working directory
pub const TARGET_PATH: &str = "temp_event_page3.tsx";

/// Zero-based line the occurrences card is spliced in front of. A fixed offset,
/// not an anchor: nothing checks that it lands between JSX elements, and in the
/// current event page it falls among the `useState` hook declarations.
pub const INSERT_INDEX: usize = 141;

/// Recurring-event occurrences card for the event detail page.
pub const OCCURRENCES_CARD: Payload = Payload::new(
    r#"              {/* Event Occurrences */}
              {event.is_recurring && (
                <Card className="mt-6">
                  <CardHeader>
                    <CardTitle className="flex items-center gap-2">
                      <Repeat className="h-5 w-5" />
                      Event Occurrences
                    </CardTitle>
                    <CardDescription>
                      Every occurrence is a separate event with its own registrations and attendance.
                    </CardDescription>
                  </CardHeader>
                  <CardContent>
                    {loadingOccurrences ? (
                      <div className="flex items-center justify-center py-6">
                        <Loader2 className="h-5 w-5 animate-spin text-slate-400" />
                      </div>
                    ) : eventOccurrences.length === 0 ? (
                      <p className="text-sm text-slate-500">No occurrences generated yet.</p>
                    ) : (
                      <ul className="divide-y divide-slate-100">
                        {eventOccurrences.map((occurrence) => (
                          <li key={occurrence.id} className="flex items-center justify-between py-2">
                            <span className="text-sm font-medium text-slate-700">
                              {format(new Date(occurrence.event_date), 'PPP p')}
                            </span>
                            <Badge variant={occurrence.status === 'completed' ? 'secondary' : 'default'}>
                              {occurrence.status}
                            </Badge>
                          </li>
                        ))}
                      </ul>
                    )}
                  </CardContent>
                </Card>
              )}
"#,
);
